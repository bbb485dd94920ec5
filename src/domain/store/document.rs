//! The persisted dataset.
//!
//! Every operation reads one `Document`, changes a copy, and writes the whole
//! copy back. Lookups here are linear; the dataset is a single campus.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::club::{BaseRole, Club, ClubMembership, CustomRole, MemberRole};
use crate::domain::club_event::{ClubEvent, EventStatus};
use crate::domain::foundation::{
    ClubEventId, ClubId, CustomRoleId, DomainError, ErrorCode, JoinRequestId, UserId,
};
use crate::domain::membership::JoinRequest;
use crate::domain::user::User;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub users: Vec<User>,
    pub clubs: Vec<Club>,
    pub events: Vec<ClubEvent>,
    pub club_memberships: Vec<ClubMembership>,
    pub join_requests: Vec<JoinRequest>,
    pub custom_roles: Vec<CustomRole>,
    /// User id to PIN. Absent means the default PIN.
    pub pins: BTreeMap<String, String>,
}

impl Document {
    // ─── Users ──────────────────────────────────────────────────────────────

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    pub fn user_mut(&mut self, id: &UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| &u.id == id)
    }

    pub fn require_user(&self, id: &UserId) -> Result<&User, DomainError> {
        self.user(id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::UserNotFound, "User", id))
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.has_email(email))
    }

    /// True if another account already uses `email`.
    pub fn email_taken(&self, email: &str, except: Option<&UserId>) -> bool {
        self.users
            .iter()
            .any(|u| u.has_email(email) && Some(&u.id) != except)
    }

    pub fn pin_for(&self, id: &UserId) -> Option<&str> {
        self.pins.get(id.as_str()).map(String::as_str)
    }

    // ─── Clubs ──────────────────────────────────────────────────────────────

    pub fn club(&self, id: &ClubId) -> Option<&Club> {
        self.clubs.iter().find(|c| &c.id == id)
    }

    pub fn club_mut(&mut self, id: &ClubId) -> Option<&mut Club> {
        self.clubs.iter_mut().find(|c| &c.id == id)
    }

    pub fn require_club(&self, id: &ClubId) -> Result<&Club, DomainError> {
        self.club(id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::ClubNotFound, "Club", id))
    }

    /// The club a coordinator runs, if any.
    pub fn club_of_coordinator(&self, coordinator: &UserId) -> Option<&Club> {
        self.clubs.iter().find(|c| c.is_coordinated_by(coordinator))
    }

    // ─── Events ─────────────────────────────────────────────────────────────

    pub fn event(&self, id: &ClubEventId) -> Option<&ClubEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn event_mut(&mut self, id: &ClubEventId) -> Option<&mut ClubEvent> {
        self.events.iter_mut().find(|e| &e.id == id)
    }

    pub fn require_event(&self, id: &ClubEventId) -> Result<&ClubEvent, DomainError> {
        self.event(id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::EventNotFound, "Event", id))
    }

    pub fn events_of_club<'a>(&'a self, club_id: &'a ClubId) -> impl Iterator<Item = &'a ClubEvent> + 'a {
        self.events.iter().filter(move |e| &e.club_id == club_id)
    }

    pub fn approved_events(&self) -> impl Iterator<Item = &ClubEvent> {
        self.events
            .iter()
            .filter(|e| e.status == EventStatus::Approved)
    }

    // ─── Memberships ────────────────────────────────────────────────────────

    pub fn membership(&self, user_id: &UserId, club_id: &ClubId) -> Option<&ClubMembership> {
        self.club_memberships
            .iter()
            .find(|m| m.is_for(user_id, club_id))
    }

    pub fn membership_mut(
        &mut self,
        user_id: &UserId,
        club_id: &ClubId,
    ) -> Option<&mut ClubMembership> {
        self.club_memberships
            .iter_mut()
            .find(|m| m.is_for(user_id, club_id))
    }

    pub fn is_member(&self, user_id: &UserId, club_id: &ClubId) -> bool {
        self.membership(user_id, club_id).is_some()
    }

    pub fn memberships_of_user<'a>(
        &'a self,
        user_id: &'a UserId,
    ) -> impl Iterator<Item = &'a ClubMembership> + 'a {
        self.club_memberships
            .iter()
            .filter(move |m| &m.user_id == user_id)
    }

    pub fn members_of_club<'a>(
        &'a self,
        club_id: &'a ClubId,
    ) -> impl Iterator<Item = &'a ClubMembership> + 'a {
        self.club_memberships
            .iter()
            .filter(move |m| &m.club_id == club_id)
    }

    pub fn member_count(&self, club_id: &ClubId) -> usize {
        self.members_of_club(club_id).count()
    }

    // ─── Join requests ──────────────────────────────────────────────────────

    pub fn join_request(&self, id: &JoinRequestId) -> Option<&JoinRequest> {
        self.join_requests.iter().find(|r| &r.id == id)
    }

    pub fn join_request_mut(&mut self, id: &JoinRequestId) -> Option<&mut JoinRequest> {
        self.join_requests.iter_mut().find(|r| &r.id == id)
    }

    pub fn require_join_request(&self, id: &JoinRequestId) -> Result<&JoinRequest, DomainError> {
        self.join_request(id).ok_or_else(|| {
            DomainError::not_found(ErrorCode::JoinRequestNotFound, "Join request", id)
        })
    }

    pub fn pending_request(&self, user_id: &UserId, club_id: &ClubId) -> Option<&JoinRequest> {
        self.join_requests
            .iter()
            .find(|r| r.is_pending() && r.is_for(user_id, club_id))
    }

    /// Pending requests for a club in the order they were made.
    pub fn pending_requests_for_club<'a>(
        &'a self,
        club_id: &'a ClubId,
    ) -> impl Iterator<Item = &'a JoinRequest> + 'a {
        self.join_requests
            .iter()
            .filter(move |r| r.is_pending() && &r.club_id == club_id)
    }

    // ─── Custom roles ───────────────────────────────────────────────────────

    pub fn custom_role(&self, id: &CustomRoleId) -> Option<&CustomRole> {
        self.custom_roles.iter().find(|r| &r.id == id)
    }

    pub fn require_custom_role(&self, id: &CustomRoleId) -> Result<&CustomRole, DomainError> {
        self.custom_role(id).ok_or_else(|| {
            DomainError::not_found(ErrorCode::CustomRoleNotFound, "Custom role", id)
        })
    }

    pub fn custom_roles_of_club<'a>(
        &'a self,
        club_id: &'a ClubId,
    ) -> impl Iterator<Item = &'a CustomRole> + 'a {
        self.custom_roles
            .iter()
            .filter(move |r| &r.club_id == club_id)
    }

    /// Base roles are valid everywhere; custom roles only in their own club.
    pub fn role_is_valid_for_club(&self, role: &MemberRole, club_id: &ClubId) -> bool {
        match role {
            MemberRole::Base(_) => true,
            MemberRole::Custom(id) => self
                .custom_role(id)
                .map(|r| &r.club_id == club_id)
                .unwrap_or(false),
            MemberRole::Legacy(_) => false,
        }
    }

    /// Human-readable name for a role.
    pub fn role_label(&self, role: &MemberRole) -> String {
        match role {
            MemberRole::Base(base) => base.label().to_string(),
            MemberRole::Custom(id) => self
                .custom_role(id)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| BaseRole::Member.label().to_string()),
            MemberRole::Legacy(name) => name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::bootstrap_document;

    fn id<T: std::str::FromStr>(s: &str) -> T
    where
        T::Err: std::fmt::Debug,
    {
        s.parse().unwrap()
    }

    #[test]
    fn empty_json_loads_as_empty_document() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, Document::default());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let doc: Document = serde_json::from_str(r#"{"users": []}"#).unwrap();
        assert!(doc.clubs.is_empty());
        assert!(doc.pins.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_collection_names() {
        let json = serde_json::to_value(Document::default()).unwrap();
        for key in [
            "users",
            "clubs",
            "events",
            "clubMemberships",
            "joinRequests",
            "customRoles",
            "pins",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn lookups_on_seed() {
        let doc = bootstrap_document();
        assert_eq!(doc.require_user(&id("3")).unwrap().name, "Mike Student");
        assert!(doc.user_by_email("JOHN@college.edu").is_some());
        assert!(doc.is_member(&id("3"), &id("1")));
        assert_eq!(doc.member_count(&id("1")), 1);
        assert_eq!(
            doc.club_of_coordinator(&id("2")).map(|c| c.id.as_str()),
            Some("1")
        );
    }

    #[test]
    fn require_reports_not_found_code() {
        let doc = Document::default();
        let err = doc.require_club(&id("99")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ClubNotFound);
        assert_eq!(err.message, "Club not found: 99");
    }

    #[test]
    fn custom_roles_are_scoped_to_their_club() {
        let doc = bootstrap_document();
        let tech_lead = MemberRole::Custom(id("1"));
        assert!(doc.role_is_valid_for_club(&tech_lead, &id("1")));
        assert!(!doc.role_is_valid_for_club(&tech_lead, &id("2")));
        assert!(!doc.role_is_valid_for_club(&MemberRole::Custom(id("404")), &id("1")));
        assert!(doc.role_is_valid_for_club(&BaseRole::Treasurer.into(), &id("2")));
        assert_eq!(doc.role_label(&tech_lead), "Tech Lead");
    }

    #[test]
    fn email_taken_can_exclude_self() {
        let doc = bootstrap_document();
        assert!(doc.email_taken("mike@college.edu", None));
        assert!(!doc.email_taken("mike@college.edu", Some(&id("3"))));
    }
}
