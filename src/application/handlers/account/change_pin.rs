//! ChangePinHandler - A signed-in user replaces their PIN.

use secrecy::SecretString;
use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_signed_in, publish_event};
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::directory::change_pin;
use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp, UserId};
use crate::domain::user::PinChanged;
use crate::ports::EventPublisher;

pub struct ChangePinCommand {
    pub user_id: UserId,
    pub current_pin: SecretString,
    pub new_pin: SecretString,
    pub confirm_pin: SecretString,
}

pub struct ChangePinHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ChangePinHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ChangePinCommand,
        metadata: CommandMetadata,
    ) -> Result<PinChanged, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                authorize_signed_in(
                    doc,
                    &metadata,
                    Operation::ChangePin,
                    &Resource::Account(cmd.user_id.clone()),
                )?;
                change_pin(
                    doc,
                    &cmd.user_id,
                    &cmd.current_pin,
                    &cmd.new_pin,
                    &cmd.confirm_pin,
                    Timestamp::now(),
                )
            })
            .await?;

        let event = committed.value;
        info!(user_id = %event.user_id, "PIN changed");
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use crate::domain::foundation::ErrorCode;

    fn handler(ctx: &TestContext) -> ChangePinHandler {
        ChangePinHandler::new(ctx.store.clone(), ctx.publisher())
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    fn cmd(user: &str, current: &str, new_pin: &str, confirm: &str) -> ChangePinCommand {
        ChangePinCommand {
            user_id: user_id(user),
            current_pin: secret(current),
            new_pin: secret(new_pin),
            confirm_pin: secret(confirm),
        }
    }

    #[tokio::test]
    async fn stores_new_pin() {
        let ctx = TestContext::seeded();

        handler(&ctx)
            .handle(cmd(STUDENT, "0000", "2468", "2468"), as_user(STUDENT))
            .await
            .unwrap();

        let doc = ctx.document().await;
        assert_eq!(doc.pin_for(&user_id(STUDENT)), Some("2468"));
        assert!(ctx.bus.has_event("user.pin_changed.v1"));
    }

    #[tokio::test]
    async fn format_then_confirmation_then_current_pin() {
        let ctx = TestContext::seeded();
        let h = handler(&ctx);

        let err = h.handle(cmd(STUDENT, "9999", "12", "34"), as_user(STUDENT)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);

        let err = h.handle(cmd(STUDENT, "9999", "1234", "4321"), as_user(STUDENT)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PinMismatch);

        let err = h.handle(cmd(STUDENT, "9999", "1234", "1234"), as_user(STUDENT)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPin);
    }

    #[tokio::test]
    async fn cannot_change_someone_elses_pin() {
        let ctx = TestContext::seeded();

        let err = handler(&ctx)
            .handle(cmd(STUDENT, "0000", "1111", "1111"), as_user(ADMIN))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(ctx.document().await.pin_for(&user_id(STUDENT)), Some("0000"));
    }
}
