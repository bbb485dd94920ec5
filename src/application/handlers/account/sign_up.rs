//! SignUpHandler - Self-service student registration.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_caller, publish_event};
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::directory::sign_up;
use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp};
use crate::domain::user::{NewUserProfile, User, UserRegistered};
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub profile: NewUserProfile,
}

#[derive(Debug, Clone)]
pub struct SignUpResult {
    pub user: User,
    pub event: UserRegistered,
}

pub struct SignUpHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SignUpHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SignUpCommand,
        metadata: CommandMetadata,
    ) -> Result<SignUpResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                authorize_caller(doc, &metadata, Operation::SignUp, &Resource::Dataset)?;
                sign_up(doc, cmd.profile, Timestamp::now())
            })
            .await?;

        let event = committed.value;
        let user = committed.document.require_user(&event.user_id)?.clone();

        info!(user_id = %user.id, "Student signed up");
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(SignUpResult { user, event })
    }
}
