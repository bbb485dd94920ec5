//! Student dashboard read model.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::club::{Club, MemberRole};
use crate::domain::club_event::ClubEvent;
use crate::domain::foundation::{ClubId, DomainError, UserId};
use crate::domain::store::Document;
use crate::domain::user::User;

/// A club the student belongs to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyClub {
    pub club: Club,
    pub role: MemberRole,
    pub role_label: String,
    pub member_count: usize,
}

/// A club in the browse list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubListing {
    pub club: Club,
    pub member_count: usize,
    pub is_member: bool,
    pub has_pending_request: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub student: User,
    pub my_clubs: Vec<MyClub>,
    pub pending_club_ids: Vec<ClubId>,
    pub clubs: Vec<ClubListing>,
    /// Approved events from `today` on, soonest first.
    pub upcoming_events: Vec<ClubEvent>,
    /// Approved events of the student's clubs before `today`, latest first.
    pub past_events: Vec<ClubEvent>,
}

impl StudentDashboard {
    /// Builds the dashboard for `student_id`.
    ///
    /// `search` filters clubs by name, category or description and upcoming
    /// events by title, ignoring case. An empty search matches everything.
    pub fn build(
        doc: &Document,
        student_id: &UserId,
        search: &str,
        today: NaiveDate,
    ) -> Result<Self, DomainError> {
        let student = doc.require_user(student_id)?.clone();
        let term = search.trim().to_lowercase();

        let my_clubs: Vec<MyClub> = doc
            .memberships_of_user(student_id)
            .filter_map(|m| {
                doc.club(&m.club_id).map(|club| MyClub {
                    club: club.clone(),
                    role: m.role.clone(),
                    role_label: doc.role_label(&m.role),
                    member_count: doc.member_count(&club.id),
                })
            })
            .collect();

        let pending_club_ids: Vec<ClubId> = doc
            .join_requests
            .iter()
            .filter(|r| r.is_pending() && &r.user_id == student_id)
            .map(|r| r.club_id.clone())
            .collect();

        let clubs = doc
            .clubs
            .iter()
            .filter(|c| c.matches_search(&term))
            .map(|c| ClubListing {
                club: c.clone(),
                member_count: doc.member_count(&c.id),
                is_member: doc.is_member(student_id, &c.id),
                has_pending_request: pending_club_ids.contains(&c.id),
            })
            .collect();

        let mut upcoming_events: Vec<ClubEvent> = doc
            .approved_events()
            .filter(|e| e.is_upcoming(today) && e.title.to_lowercase().contains(&term))
            .cloned()
            .collect();
        upcoming_events.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));

        let mut past_events: Vec<ClubEvent> = doc
            .approved_events()
            .filter(|e| !e.is_upcoming(today) && my_clubs.iter().any(|m| m.club.id == e.club_id))
            .cloned()
            .collect();
        past_events.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)));

        Ok(Self {
            student,
            my_clubs,
            pending_club_ids,
            clubs,
            upcoming_events,
            past_events,
        })
    }
}
