//! DeleteUserHandler - Admin removes an account and everything hanging off it.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::{authorize_signed_in, PendingEvents};
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::club::ClubDeleted;
use crate::domain::directory::delete_user;
use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp, UserId};
use crate::domain::user::UserDeleted;
use crate::ports::EventPublisher;

#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct DeleteUserResult {
    pub event: UserDeleted,
    /// Clubs the user coordinated, deleted with them.
    pub deleted_clubs: Vec<ClubDeleted>,
}

pub struct DeleteUserHandler {
    store: Arc<DomainStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DeleteUserHandler {
    pub fn new(store: Arc<DomainStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteUserCommand,
        metadata: CommandMetadata,
    ) -> Result<DeleteUserResult, DomainError> {
        let committed = self
            .store
            .transact(|doc| {
                let admin = authorize_signed_in(
                    doc,
                    &metadata,
                    Operation::DeleteUser,
                    &Resource::Account(cmd.user_id.clone()),
                )?;
                delete_user(doc, &cmd.user_id, &admin, Timestamp::now())
            })
            .await?;

        let (event, deleted_clubs) = committed.value;
        info!(
            user_id = %event.user_id,
            removed_clubs = event.removed_clubs.len(),
            "User deleted"
        );

        let mut pending = PendingEvents::new(&metadata);
        for club in &deleted_clubs {
            pending.record(club);
        }
        pending.record(&event);
        pending.publish(self.event_publisher.as_ref()).await;

        Ok(DeleteUserResult {
            event,
            deleted_clubs,
        })
    }
}
