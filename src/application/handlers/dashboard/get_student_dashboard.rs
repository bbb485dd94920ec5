//! GetStudentDashboardHandler - Query handler for the student home view.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use crate::application::handlers::support::authorize_signed_in;
use crate::application::DomainStore;
use crate::domain::access::{Operation, Resource};
use crate::domain::dashboard::StudentDashboard;
use crate::domain::foundation::{CommandMetadata, DomainError};

/// Query for the signed-in student's dashboard.
#[derive(Debug, Clone)]
pub struct GetStudentDashboardQuery {
    /// Filters clubs and upcoming events. Empty matches everything.
    pub search: String,
    pub today: NaiveDate,
}

pub struct GetStudentDashboardHandler {
    store: Arc<DomainStore>,
}

impl GetStudentDashboardHandler {
    pub fn new(store: Arc<DomainStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetStudentDashboardQuery,
        metadata: CommandMetadata,
    ) -> Result<StudentDashboard, DomainError> {
        let doc = self.store.snapshot().await?;
        let student = authorize_signed_in(
            &doc,
            &metadata,
            Operation::ViewStudentDashboard,
            &Resource::Dataset,
        )?;

        let dashboard = StudentDashboard::build(&doc, &student, &query.search, query.today)?;
        debug!(
            user_id = %student,
            clubs = dashboard.clubs.len(),
            upcoming = dashboard.upcoming_events.len(),
            "Student dashboard built"
        );
        Ok(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use crate::domain::foundation::ErrorCode;

    fn query(search: &str, today: NaiveDate) -> GetStudentDashboardQuery {
        GetStudentDashboardQuery {
            search: search.to_string(),
            today,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn workshop_is_upcoming_before_its_date_and_past_after() {
        let ctx = TestContext::seeded();
        let handler = GetStudentDashboardHandler::new(ctx.store.clone());

        let before = handler.handle(query("", day(2024, 3, 1)), as_user(STUDENT)).await.unwrap();
        assert_eq!(before.upcoming_events.len(), 1);
        assert!(before.past_events.is_empty());

        let after = handler.handle(query("", day(2024, 4, 1)), as_user(STUDENT)).await.unwrap();
        assert!(after.upcoming_events.is_empty());
        assert_eq!(after.past_events.len(), 1);
    }

    #[tokio::test]
    async fn search_filters_clubs_case_insensitively() {
        let ctx = TestContext::seeded();
        let handler = GetStudentDashboardHandler::new(ctx.store.clone());

        let hit = handler.handle(query("TECHNO", day(2024, 1, 1)), as_user(STUDENT)).await.unwrap();
        let miss = handler.handle(query("pottery", day(2024, 1, 1)), as_user(STUDENT)).await.unwrap();

        assert_eq!(hit.clubs.len(), 1);
        assert!(miss.clubs.is_empty());
        assert_eq!(miss.my_clubs.len(), 1);
    }

    #[tokio::test]
    async fn coordinator_is_forbidden() {
        let ctx = TestContext::seeded();

        let err = GetStudentDashboardHandler::new(ctx.store.clone())
            .handle(query("", day(2024, 1, 1)), as_user(COORDINATOR))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
