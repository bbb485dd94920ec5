//! ExportDatasetHandler - Admin downloads the dataset as pretty JSON.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use crate::application::handlers::support::authorize_signed_in;
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::dashboard::{DatasetExport, ExportFile};
use crate::domain::foundation::{CommandMetadata, DomainError};

#[derive(Debug, Clone)]
pub struct ExportDatasetQuery {
    /// Date stamped into the file name.
    pub on: NaiveDate,
}

pub struct ExportDatasetHandler {
    store: Arc<DomainStore>,
}

impl ExportDatasetHandler {
    pub fn new(store: Arc<DomainStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ExportDatasetQuery,
        metadata: CommandMetadata,
    ) -> Result<ExportFile, DomainError> {
        let doc = self.store.snapshot().await?;
        authorize_signed_in(&doc, &metadata, Operation::ExportDataset, &Resource::Dataset)?;

        let file = DatasetExport::from_document(&doc).render(query.on)?;
        info!(file_name = %file.file_name, bytes = file.contents.len(), "Dataset exported");
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use crate::domain::foundation::ErrorCode;

    fn query() -> ExportDatasetQuery {
        ExportDatasetQuery {
            on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn admin_gets_named_export_without_pins() {
        let ctx = TestContext::seeded();

        let file = ExportDatasetHandler::new(ctx.store.clone())
            .handle(query(), as_user(ADMIN))
            .await
            .unwrap();

        assert_eq!(file.file_name, "campus_life_export_2024-03-01.json");
        let json: serde_json::Value = serde_json::from_str(&file.contents).unwrap();
        assert_eq!(json["users"].as_array().unwrap().len(), 3);
        assert!(json.get("pins").is_none());
        assert!(json.get("clubMemberships").is_some());
    }

    #[tokio::test]
    async fn student_cannot_export() {
        let ctx = TestContext::seeded();

        let err = ExportDatasetHandler::new(ctx.store.clone())
            .handle(query(), as_user(STUDENT))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
