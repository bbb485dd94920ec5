//! DecideEventHandler - Coordinator approves or rejects a proposed event.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_for_club, PendingEvents};
use crate::application::DomainStore;
use crate::domain::access::Operation;
use crate::domain::club_event::{decide_event, ClubEvent, EventDecision, EventDecisionOutcome};
use crate::domain::foundation::{ClubEventId, CommandMetadata, DomainError, Timestamp};
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct DecideEventCommand {
    pub event_id: ClubEventId,
    pub decision: EventDecision,
}

#[derive(Debug, Clone)]
pub struct DecideEventResult {
    pub event: ClubEvent,
    pub outcome: EventDecisionOutcome,
}

pub struct DecideEventHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DecideEventHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: DecideEventCommand,
        metadata: CommandMetadata,
    ) -> Result<DecideEventResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let club_id = doc.require_event(&cmd.event_id)?.club_id.clone();
                let coordinator =
                    authorize_for_club(doc, &metadata, Operation::DecideEvent, &club_id)?;
                decide_event(doc, &cmd.event_id, cmd.decision, &coordinator, Timestamp::now())
            })
            .await?;

        let event = committed.document.require_event(&cmd.event_id)?.clone();
        info!(
            club_event_id = %cmd.event_id,
            club_id = %event.club_id,
            status = event.status.as_str(),
            "Event decided"
        );

        let mut pending = PendingEvents::new(&metadata);
        match &committed.value {
            EventDecisionOutcome::Approved(approved) => pending.record(approved),
            EventDecisionOutcome::Rejected(rejected) => pending.record(rejected),
        }
        pending.publish(self.event_publisher.as_ref()).await;

        Ok(DecideEventResult {
            event,
            outcome: committed.value,
        })
    }
}
