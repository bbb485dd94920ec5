//! CreateCustomRoleHandler - Coordinator defines a club-specific role.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_for_club, publish_event};
use crate::application::DomainStore;
use crate::domain::access::Operation;
use crate::domain::club::{CustomRole, CustomRoleCreated};
use crate::domain::foundation::{ClubId, CommandMetadata, DomainError, Timestamp};
use crate::domain::membership::create_custom_role;
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct CreateCustomRoleCommand {
    pub club_id: ClubId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct CreateCustomRoleResult {
    pub role: CustomRole,
    pub event: CustomRoleCreated,
}

pub struct CreateCustomRoleHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateCustomRoleHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateCustomRoleCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateCustomRoleResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let coordinator =
                    authorize_for_club(doc, &metadata, Operation::ManageCustomRoles, &cmd.club_id)?;
                create_custom_role(
                    doc,
                    &cmd.club_id,
                    &cmd.name,
                    &cmd.description,
                    &coordinator,
                    Timestamp::now(),
                )
            })
            .await?;

        let event = committed.value;
        let role = committed.document.require_custom_role(&event.role_id)?.clone();

        info!(club_id = %event.club_id, role_id = %event.role_id, name = %event.name, "Custom role created");
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(CreateCustomRoleResult { role, event })
    }
}
