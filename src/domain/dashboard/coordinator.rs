//! Coordinator dashboard read model.

use serde::Serialize;

use crate::domain::club::{Club, ClubMembership, CustomRole};
use crate::domain::club_event::ClubEvent;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::membership::JoinRequest;
use crate::domain::store::Document;
use crate::domain::user::User;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRow {
    pub membership: ClubMembership,
    pub user: User,
    pub role_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequestRow {
    pub request: JoinRequest,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorDashboard {
    pub club: Club,
    pub members: Vec<MemberRow>,
    /// All statuses, by date then time.
    pub events: Vec<ClubEvent>,
    /// In the order the requests were made.
    pub pending_requests: Vec<PendingRequestRow>,
    pub custom_roles: Vec<CustomRole>,
}

impl CoordinatorDashboard {
    /// Builds the dashboard for the club `coordinator_id` runs.
    ///
    /// Rows whose user no longer exists are skipped.
    pub fn build(doc: &Document, coordinator_id: &UserId) -> Result<Self, DomainError> {
        doc.require_user(coordinator_id)?;
        let club = doc.club_of_coordinator(coordinator_id).ok_or_else(|| {
            DomainError::new(ErrorCode::ClubNotFound, "No club is assigned to this coordinator")
                .with_detail("user_id", coordinator_id.to_string())
        })?;

        let members = doc
            .members_of_club(&club.id)
            .filter_map(|m| {
                doc.user(&m.user_id).map(|u| MemberRow {
                    membership: m.clone(),
                    user: u.clone(),
                    role_label: doc.role_label(&m.role),
                })
            })
            .collect();

        let mut events: Vec<ClubEvent> = doc.events_of_club(&club.id).cloned().collect();
        events.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));

        let pending_requests = doc
            .pending_requests_for_club(&club.id)
            .filter_map(|r| {
                doc.user(&r.user_id).map(|u| PendingRequestRow {
                    request: r.clone(),
                    user: u.clone(),
                })
            })
            .collect();

        let custom_roles = doc.custom_roles_of_club(&club.id).cloned().collect();

        Ok(Self {
            club: club.clone(),
            members,
            events,
            pending_requests,
            custom_roles,
        })
    }
}
