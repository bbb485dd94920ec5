//! CreateClubHandler - Admin creates a club and assigns its coordinator.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_signed_in, publish_event};
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::club::{Club, ClubCreated, NewClub};
use crate::domain::directory::create_club;
use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp, UserId};
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct CreateClubCommand {
    pub club: NewClub,
    pub coordinator_id: UserId,
}

#[derive(Debug, Clone)]
pub struct CreateClubResult {
    pub club: Club,
    pub event: ClubCreated,
}

pub struct CreateClubHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateClubHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateClubCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateClubResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let admin =
                    authorize_signed_in(doc, &metadata, Operation::CreateClub, &Resource::Dataset)?;
                create_club(doc, cmd.club, &cmd.coordinator_id, &admin, Timestamp::now())
            })
            .await?;

        let event = committed.value;
        let club = committed.document.require_club(&event.club_id)?.clone();

        info!(club_id = %club.id, coordinator_id = %club.coordinator_id, "Club created");
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(CreateClubResult { club, event })
    }
}
