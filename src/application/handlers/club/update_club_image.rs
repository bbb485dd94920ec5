//! UpdateClubImageHandler - Owning coordinator replaces the club picture.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_for_club, publish_event};
use crate::application::DomainStore;
use crate::domain::access::Operation;
use crate::domain::club::{Club, ClubImageUpdated};
use crate::domain::directory::update_club_image;
use crate::domain::foundation::{ClubId, CommandMetadata, DomainError, Timestamp};
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct UpdateClubImageCommand {
    pub club_id: ClubId,
    pub image: String,
}

#[derive(Debug, Clone)]
pub struct UpdateClubImageResult {
    pub club: Club,
    pub event: ClubImageUpdated,
}

pub struct UpdateClubImageHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateClubImageHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateClubImageCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateClubImageResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let coordinator =
                    authorize_for_club(doc, &metadata, Operation::EditClubImage, &cmd.club_id)?;
                update_club_image(doc, &cmd.club_id, &cmd.image, &coordinator, Timestamp::now())
            })
            .await?;

        let event = committed.value;
        let club = committed.document.require_club(&event.club_id)?.clone();

        info!(club_id = %club.id, "Club image updated");
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(UpdateClubImageResult { club, event })
    }
}
