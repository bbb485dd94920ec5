//! UpdateRegistrationHandler - A student registers for, or withdraws from,
//! an approved event.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_signed_in, publish_event};
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::club_event::{
    register_for_event, withdraw_registration, ClubEvent, RegistrationChanged,
};
use crate::domain::foundation::{ClubEventId, CommandMetadata, DomainError, Timestamp};
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct UpdateRegistrationCommand {
    pub event_id: ClubEventId,
    /// `true` to register, `false` to withdraw.
    pub register: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateRegistrationResult {
    pub event: ClubEvent,
    pub change: RegistrationChanged,
}

pub struct UpdateRegistrationHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateRegistrationHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateRegistrationCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateRegistrationResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                doc.require_event(&cmd.event_id)?;
                let student = authorize_signed_in(
                    doc,
                    &metadata,
                    Operation::RegisterForEvent,
                    &Resource::Dataset,
                )?;
                if cmd.register {
                    register_for_event(doc, &cmd.event_id, &student, Timestamp::now())
                } else {
                    withdraw_registration(doc, &cmd.event_id, &student, Timestamp::now())
                }
            })
            .await?;

        let change = committed.value;
        let event = committed.document.require_event(&cmd.event_id)?.clone();

        info!(
            club_event_id = %change.club_event_id,
            user_id = %change.user_id,
            registered = change.registered,
            "Event registration updated"
        );
        publish_event(self.event_publisher.as_ref(), &metadata, &change).await;

        Ok(UpdateRegistrationResult { event, change })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use crate::domain::club_event::EventStatus;
    use crate::domain::foundation::ErrorCode;

    fn handler(ctx: &TestContext) -> UpdateRegistrationHandler {
        UpdateRegistrationHandler::new(ctx.store.clone(), ctx.publisher())
    }

    fn workshop() -> ClubEventId {
        ClubEventId::new("1").unwrap()
    }

    #[tokio::test]
    async fn withdraw_then_register_again() {
        let ctx = TestContext::seeded();

        let withdrawn = handler(&ctx)
            .handle(
                UpdateRegistrationCommand {
                    event_id: workshop(),
                    register: false,
                },
                as_user(STUDENT),
            )
            .await
            .unwrap();
        assert!(withdrawn.event.registered_users.is_empty());

        let registered = handler(&ctx)
            .handle(
                UpdateRegistrationCommand {
                    event_id: workshop(),
                    register: true,
                },
                as_user(STUDENT),
            )
            .await
            .unwrap();
        assert_eq!(registered.event.registered_users, vec![user_id(STUDENT)]);
        assert_eq!(ctx.bus.events_of_type("club_event.registration_changed.v1").len(), 2);
    }

    #[tokio::test]
    async fn double_registration_conflicts() {
        let ctx = TestContext::seeded();

        let err = handler(&ctx)
            .handle(
                UpdateRegistrationCommand {
                    event_id: workshop(),
                    register: true,
                },
                as_user(STUDENT),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::AlreadyRegistered);
    }

    #[tokio::test]
    async fn proposed_event_is_not_open() {
        let mut doc = TestContext::seeded().document().await;
        doc.events[0].status = EventStatus::Proposed;
        doc.events[0].registered_users.clear();
        let ctx = TestContext::with_document(doc);

        let err = handler(&ctx)
            .handle(
                UpdateRegistrationCommand {
                    event_id: workshop(),
                    register: true,
                },
                as_user(STUDENT),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EventNotOpen);
    }

    #[tokio::test]
    async fn coordinator_cannot_register() {
        let ctx = TestContext::seeded();

        let err = handler(&ctx)
            .handle(
                UpdateRegistrationCommand {
                    event_id: workshop(),
                    register: true,
                },
                as_user(COORDINATOR),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
