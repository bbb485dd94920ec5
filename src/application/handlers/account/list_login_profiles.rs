//! ListLoginProfilesHandler - Profiles offered on the sign-in screen.

use std::sync::Arc;

use crate::application::handlers::support::authorize_caller;
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::dashboard::{login_profiles, LoginProfile};
use crate::domain::foundation::{CommandMetadata, DomainError};

pub struct ListLoginProfilesHandler {
    store: Arc<DomainStore>,
}

impl ListLoginProfilesHandler {
    pub fn new(store: Arc<DomainStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, metadata: CommandMetadata) -> Result<Vec<LoginProfile>, DomainError> {
        let doc = self.store.snapshot().await?;
        authorize_caller(&doc, &metadata, Operation::ListLoginProfiles, &Resource::Dataset)?;
        Ok(login_profiles(&doc))
    }
}
