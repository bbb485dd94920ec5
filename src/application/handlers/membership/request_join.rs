//! RequestJoinHandler - Command handler for a student asking to join a club.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_for_club, publish_event};
use crate::application::DomainStore;
use crate::domain::access::Operation;
use crate::domain::foundation::{ClubId, CommandMetadata, DomainError, Timestamp};
use crate::domain::membership::{request_join, JoinRequest, JoinRequested};
use crate::ports::EventPublisher;

/// Command to request membership of a club.
#[derive(Debug, Clone)]
pub struct RequestJoinCommand {
    pub club_id: ClubId,
    pub message: Option<String>,
}

/// Result of a recorded join request.
#[derive(Debug, Clone)]
pub struct RequestJoinResult {
    pub request: JoinRequest,
    pub event: JoinRequested,
}

/// Handler for join requests.
pub struct RequestJoinHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RequestJoinHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: RequestJoinCommand,
        metadata: CommandMetadata,
    ) -> Result<RequestJoinResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let student = authorize_for_club(doc, &metadata, Operation::RequestJoin, &cmd.club_id)?;
                request_join(doc, &student, &cmd.club_id, cmd.message, Timestamp::now())
            })
            .await?;

        let event = committed.value;
        let request = committed
            .document
            .require_join_request(&event.request_id)?
            .clone();

        info!(
            request_id = %event.request_id,
            user_id = %event.user_id,
            club_id = %event.club_id,
            "Join request submitted"
        );
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(RequestJoinResult { request, event })
    }
}
