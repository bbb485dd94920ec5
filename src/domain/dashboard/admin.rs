//! Admin overview read model.

use serde::Serialize;

use crate::domain::club::Club;
use crate::domain::club_event::EventStatus;
use crate::domain::store::Document;
use crate::domain::user::{Role, User};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRow {
    pub club: Club,
    pub member_count: usize,
    /// `None` if the coordinator account is missing.
    pub coordinator_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub coordinators: Vec<User>,
    pub students: Vec<User>,
    pub clubs: Vec<ClubRow>,
    pub pending_requests: usize,
    pub proposed_events: usize,
}

impl AdminOverview {
    pub fn build(doc: &Document) -> Self {
        let by_role = |role: Role| -> Vec<User> {
            doc.users.iter().filter(|u| u.role == role).cloned().collect()
        };

        let clubs = doc
            .clubs
            .iter()
            .map(|c| ClubRow {
                club: c.clone(),
                member_count: doc.member_count(&c.id),
                coordinator_name: doc.user(&c.coordinator_id).map(|u| u.name.clone()),
            })
            .collect();

        Self {
            coordinators: by_role(Role::Coordinator),
            students: by_role(Role::Student),
            clubs,
            pending_requests: doc.join_requests.iter().filter(|r| r.is_pending()).count(),
            proposed_events: doc
                .events
                .iter()
                .filter(|e| e.status == EventStatus::Proposed)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::bootstrap_document;

    #[test]
    fn overview_of_seed() {
        let overview = AdminOverview::build(&bootstrap_document());
        assert_eq!(overview.coordinators.len(), 1);
        assert_eq!(overview.students.len(), 1);
        assert_eq!(overview.clubs[0].member_count, 1);
        assert_eq!(overview.clubs[0].coordinator_name.as_deref(), Some("John Tech"));
        assert_eq!(overview.pending_requests, 0);
        assert_eq!(overview.proposed_events, 0);
    }
}
