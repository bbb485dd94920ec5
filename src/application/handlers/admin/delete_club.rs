//! DeleteClubHandler - Admin deletes a club with everything scoped to it.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_signed_in, publish_event};
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::club::ClubDeleted;
use crate::domain::directory::delete_club;
use crate::domain::foundation::{ClubId, CommandMetadata, DomainError, Timestamp};
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct DeleteClubCommand {
    pub club_id: ClubId,
}

pub struct DeleteClubHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DeleteClubHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteClubCommand,
        metadata: CommandMetadata,
    ) -> Result<ClubDeleted, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let admin =
                    authorize_signed_in(doc, &metadata, Operation::DeleteClub, &Resource::Dataset)?;
                delete_club(doc, &cmd.club_id, &admin, Timestamp::now())
            })
            .await?;

        let event = committed.value;
        info!(
            club_id = %event.club_id,
            removed_memberships = event.removed_memberships,
            removed_events = event.removed_events,
            "Club deleted"
        );
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(event)
    }
}
