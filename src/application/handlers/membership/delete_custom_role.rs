//! DeleteCustomRoleHandler - Coordinator removes an unused custom role.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_for_club, publish_event};
use crate::application::DomainStore;
use crate::domain::access::Operation;
use crate::domain::club::CustomRoleDeleted;
use crate::domain::foundation::{CommandMetadata, CustomRoleId, DomainError, Timestamp};
use crate::domain::membership::delete_custom_role;
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct DeleteCustomRoleCommand {
    pub role_id: CustomRoleId,
}

pub struct DeleteCustomRoleHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DeleteCustomRoleHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteCustomRoleCommand,
        metadata: CommandMetadata,
    ) -> Result<CustomRoleDeleted, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let club_id = doc.require_custom_role(&cmd.role_id)?.club_id.clone();
                let coordinator =
                    authorize_for_club(doc, &metadata, Operation::ManageCustomRoles, &club_id)?;
                delete_custom_role(doc, &cmd.role_id, &coordinator, Timestamp::now())
            })
            .await?;

        let event = committed.value;
        info!(club_id = %event.club_id, role_id = %event.role_id, "Custom role deleted");
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use crate::domain::club::MemberRole;
    use crate::domain::foundation::ErrorCode;

    fn handler(ctx: &TestContext) -> DeleteCustomRoleHandler {
        DeleteCustomRoleHandler::new(ctx.store.clone(), ctx.publisher())
    }

    fn tech_lead() -> CustomRoleId {
        CustomRoleId::new("1").unwrap()
    }

    #[tokio::test]
    async fn deletes_unused_role() {
        let ctx = TestContext::seeded();

        let event = handler(&ctx)
            .handle(DeleteCustomRoleCommand { role_id: tech_lead() }, as_user(COORDINATOR))
            .await
            .unwrap();

        assert_eq!(event.role_id, tech_lead());
        assert!(ctx.document().await.custom_roles.is_empty());
    }

    #[tokio::test]
    async fn role_in_use_cannot_be_deleted() {
        let mut doc = TestContext::seeded().document().await;
        doc.club_memberships[0].role = MemberRole::Custom(tech_lead());
        let ctx = TestContext::with_document(doc);

        let err = handler(&ctx)
            .handle(DeleteCustomRoleCommand { role_id: tech_lead() }, as_user(COORDINATOR))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CustomRoleInUse);
        assert_eq!(ctx.document().await.custom_roles.len(), 1);
    }

    #[tokio::test]
    async fn unknown_role_is_not_found() {
        let ctx = TestContext::seeded();

        let err = handler(&ctx)
            .handle(
                DeleteCustomRoleCommand {
                    role_id: CustomRoleId::new("42").unwrap(),
                },
                as_user(COORDINATOR),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CustomRoleNotFound);
    }
}
