//! UpdateProfileHandler - Edit profile fields of one's own account (or any
//! account, as admin).

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_signed_in, publish_event};
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::directory::update_profile;
use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp, UserId};
use crate::domain::user::{ProfileChanges, ProfileUpdated, User};
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub changes: ProfileChanges,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileResult {
    pub user: User,
    pub event: ProfileUpdated,
}

pub struct UpdateProfileHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateProfileHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateProfileCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateProfileResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let editor = authorize_signed_in(
                    doc,
                    &metadata,
                    Operation::UpdateProfile,
                    &Resource::Account(cmd.user_id.clone()),
                )?;
                update_profile(doc, &cmd.user_id, cmd.changes, &editor, Timestamp::now())
            })
            .await?;

        let event = committed.value;
        let user = committed.document.require_user(&event.user_id)?.clone();

        info!(user_id = %user.id, updated_by = %event.updated_by, "Profile updated");
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(UpdateProfileResult { user, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::user::Role;

    fn handler(ctx: &TestContext) -> UpdateProfileHandler {
        UpdateProfileHandler::new(ctx.store.clone(), ctx.publisher())
    }

    fn change_phone(user: &str, phone: &str) -> UpdateProfileCommand {
        UpdateProfileCommand {
            user_id: user_id(user),
            changes: ProfileChanges {
                phone: Some(phone.to_string()),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn user_edits_own_profile() {
        let ctx = TestContext::seeded();

        let result = handler(&ctx)
            .handle(change_phone(STUDENT, "555-0101"), as_user(STUDENT))
            .await
            .unwrap();

        assert_eq!(result.user.phone.as_deref(), Some("555-0101"));
        assert_eq!(result.user.role, Role::Student);
    }

    #[tokio::test]
    async fn admin_edits_any_profile() {
        let ctx = TestContext::seeded();

        let result = handler(&ctx)
            .handle(change_phone(COORDINATOR, "555-0202"), as_user(ADMIN))
            .await
            .unwrap();

        assert_eq!(result.event.updated_by, user_id(ADMIN));
    }

    #[tokio::test]
    async fn student_cannot_edit_others() {
        let ctx = TestContext::seeded();

        let err = handler(&ctx)
            .handle(change_phone(COORDINATOR, "1"), as_user(STUDENT))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn email_must_stay_unique() {
        let ctx = TestContext::seeded();

        let err = handler(&ctx)
            .handle(
                UpdateProfileCommand {
                    user_id: user_id(STUDENT),
                    changes: ProfileChanges {
                        email: Some("john@college.edu".to_string()),
                        ..Default::default()
                    },
                },
                as_user(STUDENT),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmailTaken);
    }
}
