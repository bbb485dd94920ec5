//! ChangeMemberRoleHandler - Coordinator reassigns a member's role.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_for_club, publish_event};
use crate::application::DomainStore;
use crate::domain::access::Operation;
use crate::domain::club::{ClubMembership, MemberRole};
use crate::domain::foundation::{ClubId, CommandMetadata, DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::membership::{change_role, MemberRoleChanged};
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct ChangeMemberRoleCommand {
    pub club_id: ClubId,
    pub user_id: UserId,
    pub role: MemberRole,
}

#[derive(Debug, Clone)]
pub struct ChangeMemberRoleResult {
    pub membership: ClubMembership,
    pub event: MemberRoleChanged,
}

pub struct ChangeMemberRoleHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ChangeMemberRoleHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ChangeMemberRoleCommand,
        metadata: CommandMetadata,
    ) -> Result<ChangeMemberRoleResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let coordinator =
                    authorize_for_club(doc, &metadata, Operation::ChangeMemberRole, &cmd.club_id)?;
                change_role(
                    doc,
                    &cmd.user_id,
                    &cmd.club_id,
                    cmd.role.clone(),
                    &coordinator,
                    Timestamp::now(),
                )
            })
            .await?;

        let event = committed.value;
        let membership = committed
            .document
            .membership(&cmd.user_id, &cmd.club_id)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(ErrorCode::InternalError, "Membership missing after role change")
            })?;

        info!(
            user_id = %event.user_id,
            club_id = %event.club_id,
            old_role = %event.old_role,
            new_role = %event.new_role,
            "Member role changed"
        );
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(ChangeMemberRoleResult { membership, event })
    }
}
