//! LoginHandler - PIN sign-in by email.

use secrecy::SecretString;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::handlers::support::{authorize_caller, publish_event};
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::directory::authenticate;
use crate::domain::foundation::{CommandMetadata, DomainError, EventId, Timestamp};
use crate::domain::user::{User, UserSignedIn};
use crate::ports::EventPublisher;

pub struct LoginCommand {
    pub email: String,
    pub pin: SecretString,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("pin", &"****")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub event: UserSignedIn,
}

pub struct LoginHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl LoginHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: LoginCommand,
        metadata: CommandMetadata,
    ) -> Result<LoginResult, DomainError> {
        let doc = self.store.snapshot().await?;
        authorize_caller(&doc, &metadata, Operation::Login, &Resource::Dataset)?;

        let user = match authenticate(&doc, &cmd.email, &cmd.pin) {
            Ok(user) => user.clone(),
            Err(err) => {
                warn!(email = %cmd.email.trim(), code = %err.code, "Sign-in failed");
                return Err(err);
            }
        };

        let event = UserSignedIn {
            event_id: EventId::new(),
            user_id: user.id.clone(),
            signed_in_at: Timestamp::now(),
        };
        info!(user_id = %user.id, role = %user.role, "User signed in");

        let signed_in = CommandMetadata::new(user.id.clone())
            .with_correlation_id(metadata.correlation_id());
        publish_event(self.event_publisher.as_ref(), &signed_in, &event).await;

        Ok(LoginResult { user, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use crate::domain::foundation::ErrorCode;

    fn handler(ctx: &TestContext) -> LoginHandler {
        LoginHandler::new(ctx.store.clone(), ctx.publisher())
    }

    fn cmd(email: &str, pin: &str) -> LoginCommand {
        LoginCommand {
            email: email.to_string(),
            pin: SecretString::new(pin.to_string()),
        }
    }

    #[tokio::test]
    async fn default_pin_signs_in() {
        let ctx = TestContext::seeded();

        let result = handler(&ctx)
            .handle(cmd("mike@college.edu", "0000"), anonymous())
            .await
            .unwrap();

        assert_eq!(result.user.id, user_id(STUDENT));
        let events = ctx.bus.events_of_type("user.signed_in.v1");
        assert_eq!(events[0].metadata.user_id.as_deref(), Some(STUDENT));
    }

    #[tokio::test]
    async fn email_match_ignores_case() {
        let ctx = TestContext::seeded();

        let result = handler(&ctx)
            .handle(cmd("  Admin@College.edu ", "0000"), anonymous())
            .await
            .unwrap();

        assert_eq!(result.user.id, user_id(ADMIN));
    }

    #[tokio::test]
    async fn wrong_pin_is_rejected() {
        let ctx = TestContext::seeded();

        let err = handler(&ctx)
            .handle(cmd("mike@college.edu", "1234"), anonymous())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidPin);
        assert_eq!(ctx.bus.event_count(), 0);
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let ctx = TestContext::seeded();

        let err = handler(&ctx)
            .handle(cmd("ghost@college.edu", "0000"), anonymous())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::UserNotFound);
    }

    #[test]
    fn debug_hides_pin() {
        let rendered = format!("{:?}", cmd("a@b.c", "4321"));
        assert!(!rendered.contains("4321"));
    }
}
