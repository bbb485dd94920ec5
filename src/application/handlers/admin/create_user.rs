//! CreateUserHandler - Admin adds a coordinator or student account.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_signed_in, publish_event};
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::directory::create_user;
use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp};
use crate::domain::user::{NewUserProfile, Role, User, UserRegistered};
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub role: Role,
    pub profile: NewUserProfile,
}

#[derive(Debug, Clone)]
pub struct CreateUserResult {
    pub user: User,
    pub event: UserRegistered,
}

pub struct CreateUserHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateUserHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateUserCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateUserResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let admin =
                    authorize_signed_in(doc, &metadata, Operation::CreateUser, &Resource::Dataset)?;
                create_user(doc, cmd.role, cmd.profile, Some(&admin), Timestamp::now())
            })
            .await?;

        let event = committed.value;
        let user = committed.document.require_user(&event.user_id)?.clone();

        info!(user_id = %user.id, role = %user.role, "User created");
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(CreateUserResult { user, event })
    }
}
