//! RemoveMemberHandler - Coordinator removes a member from the club.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_for_club, publish_event};
use crate::application::DomainStore;
use crate::domain::access::Operation;
use crate::domain::foundation::{ClubId, CommandMetadata, DomainError, Timestamp, UserId};
use crate::domain::membership::{remove_membership, MemberRemoved};
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct RemoveMemberCommand {
    pub club_id: ClubId,
    pub user_id: UserId,
}

pub struct RemoveMemberHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RemoveMemberHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: RemoveMemberCommand,
        metadata: CommandMetadata,
    ) -> Result<MemberRemoved, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let coordinator =
                    authorize_for_club(doc, &metadata, Operation::RemoveMember, &cmd.club_id)?;
                remove_membership(doc, &cmd.user_id, &cmd.club_id, &coordinator, Timestamp::now())
            })
            .await?;

        let event = committed.value;
        info!(user_id = %event.user_id, club_id = %event.club_id, "Member removed");
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(event)
    }
}
