//! GetAdminOverviewHandler - Query handler for the admin view.

use std::sync::Arc;

use crate::application::handlers::support::authorize_signed_in;
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::dashboard::AdminOverview;
use crate::domain::foundation::{CommandMetadata, DomainError};

pub struct GetAdminOverviewHandler {
    store: Arc<DomainStore>,
}

impl GetAdminOverviewHandler {
    pub fn new(store: Arc<DomainStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, metadata: CommandMetadata) -> Result<AdminOverview, DomainError> {
        let doc = self.store.snapshot().await?;
        authorize_signed_in(&doc, &metadata, Operation::ViewAdminOverview, &Resource::Dataset)?;
        Ok(AdminOverview::build(&doc))
    }
}
