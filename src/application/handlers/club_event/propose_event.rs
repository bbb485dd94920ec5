//! ProposeEventHandler - A club member proposes an event.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_for_club, publish_event};
use crate::application::DomainStore;
use crate::domain::access::Operation;
use crate::domain::club_event::{propose_event, ClubEvent, ClubEventProposed, EventDetails};
use crate::domain::foundation::{ClubId, CommandMetadata, DomainError, Timestamp};
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct ProposeEventCommand {
    pub club_id: ClubId,
    pub details: EventDetails,
}

#[derive(Debug, Clone)]
pub struct ProposeEventResult {
    pub event: ClubEvent,
    pub proposed: ClubEventProposed,
}

pub struct ProposeEventHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ProposeEventHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProposeEventCommand,
        metadata: CommandMetadata,
    ) -> Result<ProposeEventResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let proposer =
                    authorize_for_club(doc, &metadata, Operation::ProposeEvent, &cmd.club_id)?;
                propose_event(doc, &cmd.club_id, &proposer, cmd.details, Timestamp::now())
            })
            .await?;

        let proposed = committed.value;
        let event = committed.document.require_event(&proposed.club_event_id)?.clone();

        info!(
            club_event_id = %proposed.club_event_id,
            club_id = %proposed.club_id,
            proposed_by = %proposed.proposed_by,
            "Event proposed"
        );
        publish_event(self.event_publisher.as_ref(), &metadata, &proposed).await;

        Ok(ProposeEventResult { event, proposed })
    }
}
