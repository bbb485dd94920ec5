//! First-run dataset.

use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

use crate::domain::club::{BaseRole, Club, ClubMembership, CustomRole, MemberRole};
use crate::domain::club_event::{ClubEvent, EventStatus};
use crate::domain::foundation::{ClubEventId, ClubId, CustomRoleId, Timestamp, UserId};
use crate::domain::user::{Role, User, DEFAULT_PIN};

use super::Document;

const TECH_IMAGE: &str =
    "https://images.unsplash.com/photo-1540575467063-178a50c2df87?auto=format&fit=crop&q=80&w=1200";

/// Dataset written on first load: one admin, one coordinator with a club,
/// one student who belongs to it and is registered for its workshop.
pub fn bootstrap_document() -> Document {
    let now = Timestamp::now();
    let admin = UserId::seeded("1");
    let coordinator = UserId::seeded("2");
    let student = UserId::seeded("3");
    let club = ClubId::seeded("1");

    let users = vec![
        User {
            id: admin.clone(),
            name: "Admin User".to_string(),
            email: "admin@college.edu".to_string(),
            role: Role::Admin,
            reg_no: None,
            avatar: Some(
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=100"
                    .to_string(),
            ),
            department: None,
            phone: None,
        },
        User {
            id: coordinator.clone(),
            name: "John Tech".to_string(),
            email: "john@college.edu".to_string(),
            role: Role::Coordinator,
            reg_no: Some("COORD001".to_string()),
            avatar: Some(
                "https://images.unsplash.com/photo-1599566150163-29194dcaad36?auto=format&fit=crop&q=80&w=100"
                    .to_string(),
            ),
            department: Some("Computer Science".to_string()),
            phone: Some("1234567890".to_string()),
        },
        User {
            id: student.clone(),
            name: "Mike Student".to_string(),
            email: "mike@college.edu".to_string(),
            role: Role::Student,
            reg_no: Some("STU001".to_string()),
            avatar: Some(
                "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?auto=format&fit=crop&q=80&w=100"
                    .to_string(),
            ),
            department: Some("Computer Science".to_string()),
            phone: None,
        },
    ];

    let clubs = vec![Club {
        id: club.clone(),
        name: "Tech Innovation Club".to_string(),
        description: "Exploring cutting-edge technologies and fostering innovation".to_string(),
        category: "Technology".to_string(),
        image: TECH_IMAGE.to_string(),
        coordinator_id: coordinator.clone(),
        created_by: admin.clone(),
        created_at: now,
    }];

    let events = vec![ClubEvent {
        id: ClubEventId::seeded("1"),
        title: "Tech Workshop 2024".to_string(),
        description: "Learn about the latest technologies".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(14, 0, 0).unwrap_or_default(),
        location: "Main Auditorium".to_string(),
        image: TECH_IMAGE.to_string(),
        club_id: club.clone(),
        registered_users: vec![student.clone()],
        status: EventStatus::Approved,
        proposed_by: None,
        proposed_at: None,
        approved_at: None,
        rejected_at: None,
        links: Vec::new(),
    }];

    let club_memberships = vec![ClubMembership::new(
        student,
        club.clone(),
        MemberRole::Base(BaseRole::Member),
        now,
    )];

    let custom_roles = vec![CustomRole {
        id: CustomRoleId::seeded("1"),
        club_id: club,
        name: "Tech Lead".to_string(),
        description: "Leads technical projects and mentors team members".to_string(),
        created_at: now,
    }];

    let pins: BTreeMap<String, String> = users
        .iter()
        .map(|u| (u.id.to_string(), DEFAULT_PIN.to_string()))
        .collect();

    Document {
        users,
        clubs,
        events,
        club_memberships,
        join_requests: Vec::new(),
        custom_roles,
        pins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_three_users_one_club_one_event() {
        let doc = bootstrap_document();
        assert_eq!(doc.users.len(), 3);
        assert_eq!(doc.clubs.len(), 1);
        assert_eq!(doc.events.len(), 1);
        assert!(doc.join_requests.is_empty());
    }

    #[test]
    fn seed_workshop_is_approved_with_student_registered() {
        let doc = bootstrap_document();
        let event = &doc.events[0];
        assert_eq!(event.status, EventStatus::Approved);
        assert_eq!(event.date.to_string(), "2024-03-15");
        assert_eq!(event.registered_users, vec![UserId::seeded("3")]);
    }

    #[test]
    fn seed_pins_are_keyed_by_user_id() {
        let doc = bootstrap_document();
        assert_eq!(doc.pins.len(), 3);
        assert_eq!(doc.pin_for(&UserId::seeded("2")), Some(DEFAULT_PIN));
    }

    #[test]
    fn seed_is_already_normalized() {
        let mut doc = bootstrap_document();
        let report = doc.normalize();
        assert!(report.is_clean());
    }
}
