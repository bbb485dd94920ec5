//! GetCoordinatorDashboardHandler - Query handler for the coordinator view.

use std::sync::Arc;

use crate::application::handlers::support::authorize_signed_in;
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::dashboard::CoordinatorDashboard;
use crate::domain::foundation::{CommandMetadata, DomainError};

pub struct GetCoordinatorDashboardHandler {
    store: Arc<DomainStore>,
}

impl GetCoordinatorDashboardHandler {
    pub fn new(store: Arc<DomainStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, metadata: CommandMetadata) -> Result<CoordinatorDashboard, DomainError> {
        let doc = self.store.snapshot().await?;
        let coordinator = authorize_signed_in(
            &doc,
            &metadata,
            Operation::ViewCoordinatorDashboard,
            &Resource::Dataset,
        )?;
        CoordinatorDashboard::build(&doc, &coordinator)
    }
}
