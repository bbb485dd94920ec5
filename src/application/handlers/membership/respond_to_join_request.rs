//! RespondToJoinRequestHandler - Coordinator approves or rejects a request.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_for_club, PendingEvents};
use crate::application::DomainStore;
use crate::domain::access::Operation;
use crate::domain::club::ClubMembership;
use crate::domain::foundation::{CommandMetadata, DomainError, JoinRequestId, Timestamp};
use crate::domain::membership::{respond_to_request, JoinDecision, JoinRequest, JoinResponse};
use crate::ports::EventPublisher;

/// Command to answer a pending join request.
#[derive(Debug, Clone)]
pub struct RespondToJoinRequestCommand {
    pub request_id: JoinRequestId,
    pub decision: JoinDecision,
    pub response_message: Option<String>,
}

/// Result of answering a request. `membership` is set on approval.
#[derive(Debug, Clone)]
pub struct RespondToJoinRequestResult {
    pub request: JoinRequest,
    pub membership: Option<ClubMembership>,
    pub response: JoinResponse,
}

/// Handler for join request decisions.
pub struct RespondToJoinRequestHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RespondToJoinRequestHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: RespondToJoinRequestCommand,
        metadata: CommandMetadata,
    ) -> Result<RespondToJoinRequestResult, DomainError> {
        let request_id = cmd.request_id;
        let committed = self
            .store
            .transact(|doc| {
                let club_id = doc.require_join_request(&request_id)?.club_id.clone();
                let coordinator =
                    authorize_for_club(doc, &metadata, Operation::RespondToJoinRequest, &club_id)?;
                respond_to_request(
                    doc,
                    &request_id,
                    cmd.decision,
                    cmd.response_message,
                    &coordinator,
                    Timestamp::now(),
                )
            })
            .await?;

        let doc = committed.document;
        let request = doc.require_join_request(&request_id)?.clone();
        let membership = doc.membership(&request.user_id, &request.club_id).cloned();

        let mut pending = PendingEvents::new(&metadata);
        match &committed.value {
            JoinResponse::Approved(event) => {
                info!(
                    request_id = %request_id,
                    user_id = %event.user_id,
                    club_id = %event.club_id,
                    role = %event.assigned_role,
                    "Join request approved"
                );
                pending.record(event);
            }
            JoinResponse::Rejected(event) => {
                info!(
                    request_id = %request_id,
                    user_id = %event.user_id,
                    club_id = %event.club_id,
                    "Join request rejected"
                );
                pending.record(event);
            }
        }
        pending.publish(self.event_publisher.as_ref()).await;

        Ok(RespondToJoinRequestResult {
            request,
            membership,
            response: committed.value,
        })
    }
}
