//! Event proposal lifecycle engine.

use crate::domain::foundation::{
    ClubEventId, ClubId, DomainError, ErrorCode, EventId, Timestamp, UserId,
};
use crate::domain::store::Document;

use super::{
    ClubEvent, ClubEventApproved, ClubEventProposed, ClubEventRejected, EventDetails,
    EventStatus, RegistrationChanged,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDecision {
    Approve,
    Reject,
}

/// Event produced by `decide_event`.
#[derive(Debug, Clone)]
pub enum EventDecisionOutcome {
    Approved(ClubEventApproved),
    Rejected(ClubEventRejected),
}

/// Adds a proposed event to a club. The proposer must be a member.
pub fn propose_event(
    doc: &mut Document,
    club_id: &ClubId,
    proposer: &UserId,
    details: EventDetails,
    now: Timestamp,
) -> Result<ClubEventProposed, DomainError> {
    doc.require_club(club_id)?;
    doc.require_user(proposer)?;
    if !doc.is_member(proposer, club_id) {
        return Err(DomainError::forbidden("Only club members can propose events")
            .with_detail("club_id", club_id.to_string()));
    }

    let event = ClubEvent::propose(ClubEventId::generate(), club_id.clone(), proposer.clone(), details, now)?;
    let proposed = ClubEventProposed {
        event_id: EventId::new(),
        club_event_id: event.id.clone(),
        club_id: club_id.clone(),
        proposed_by: proposer.clone(),
        title: event.title.clone(),
        proposed_at: now,
    };
    doc.events.push(event);
    Ok(proposed)
}

/// Approves or rejects a proposed event. Decided events stay decided.
pub fn decide_event(
    doc: &mut Document,
    event_id: &ClubEventId,
    decision: EventDecision,
    decided_by: &UserId,
    now: Timestamp,
) -> Result<EventDecisionOutcome, DomainError> {
    let event = find_mut(doc, event_id)?;
    if event.status != EventStatus::Proposed {
        return Err(DomainError::new(
            ErrorCode::EventAlreadyDecided,
            format!("Event has already been {}", event.status.as_str()),
        )
        .with_detail("event_id", event_id.to_string()));
    }
    let club_id = event.club_id.clone();

    match decision {
        EventDecision::Approve => {
            event.approve(now)?;
            Ok(EventDecisionOutcome::Approved(ClubEventApproved {
                event_id: EventId::new(),
                club_event_id: event_id.clone(),
                club_id,
                decided_by: decided_by.clone(),
                approved_at: now,
            }))
        }
        EventDecision::Reject => {
            event.reject(now)?;
            Ok(EventDecisionOutcome::Rejected(ClubEventRejected {
                event_id: EventId::new(),
                club_event_id: event_id.clone(),
                club_id,
                decided_by: decided_by.clone(),
                rejected_at: now,
            }))
        }
    }
}

/// Adds a student to an approved event's registrations.
pub fn register_for_event(
    doc: &mut Document,
    event_id: &ClubEventId,
    user_id: &UserId,
    now: Timestamp,
) -> Result<RegistrationChanged, DomainError> {
    doc.require_user(user_id)?;
    let event = find_mut(doc, event_id)?;
    if !event.status.is_open() {
        return Err(not_open(event_id));
    }
    if !event.register(user_id.clone()) {
        return Err(DomainError::new(
            ErrorCode::AlreadyRegistered,
            "Already registered for this event",
        )
        .with_detail("event_id", event_id.to_string()));
    }
    Ok(changed(event_id, user_id, true, now))
}

/// Removes a student from an approved event's registrations.
pub fn withdraw_registration(
    doc: &mut Document,
    event_id: &ClubEventId,
    user_id: &UserId,
    now: Timestamp,
) -> Result<RegistrationChanged, DomainError> {
    let event = find_mut(doc, event_id)?;
    if !event.status.is_open() {
        return Err(not_open(event_id));
    }
    if !event.withdraw(user_id) {
        return Err(DomainError::new(
            ErrorCode::NotRegistered,
            "Not registered for this event",
        )
        .with_detail("event_id", event_id.to_string()));
    }
    Ok(changed(event_id, user_id, false, now))
}

fn find_mut<'a>(doc: &'a mut Document, id: &ClubEventId) -> Result<&'a mut ClubEvent, DomainError> {
    doc.event_mut(id)
        .ok_or_else(|| DomainError::not_found(ErrorCode::EventNotFound, "Event", id))
}

fn not_open(event_id: &ClubEventId) -> DomainError {
    DomainError::new(ErrorCode::EventNotOpen, "Event is not open for registration")
        .with_detail("event_id", event_id.to_string())
}

fn changed(event_id: &ClubEventId, user_id: &UserId, registered: bool, now: Timestamp) -> RegistrationChanged {
    RegistrationChanged {
        event_id: EventId::new(),
        club_event_id: event_id.clone(),
        user_id: user_id.clone(),
        registered,
        changed_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorKind;
    use crate::domain::store::bootstrap_document;

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn club() -> ClubId {
        ClubId::new("1").unwrap()
    }

    fn details() -> EventDetails {
        EventDetails {
            title: "Robotics Demo".to_string(),
            description: "Show and tell".to_string(),
            date: "2031-02-01".to_string(),
            time: "10:00".to_string(),
            location: "Hall B".to_string(),
            ..Default::default()
        }
    }

    fn proposed(doc: &mut Document) -> ClubEventId {
        propose_event(doc, &club(), &uid("3"), details(), Timestamp::now())
            .unwrap()
            .club_event_id
    }

    #[test]
    fn member_proposes_event() {
        let mut doc = bootstrap_document();
        let id = proposed(&mut doc);
        let event = doc.event(&id).unwrap();
        assert_eq!(event.status, EventStatus::Proposed);
        assert_eq!(event.proposed_by, Some(uid("3")));
        assert!(event.registered_users.is_empty());
    }

    #[test]
    fn non_member_cannot_propose() {
        let mut doc = bootstrap_document();
        doc.club_memberships.clear();
        let err = propose_event(&mut doc, &club(), &uid("3"), details(), Timestamp::now()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Authorization);
        assert_eq!(doc.events.len(), 1);
    }

    #[test]
    fn missing_location_is_a_validation_error() {
        let mut doc = bootstrap_document();
        let mut d = details();
        d.location = " ".to_string();
        let err = propose_event(&mut doc, &club(), &uid("3"), d, Timestamp::now()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn approve_then_redecide_is_a_conflict() {
        let mut doc = bootstrap_document();
        let id = proposed(&mut doc);
        decide_event(&mut doc, &id, EventDecision::Approve, &uid("2"), Timestamp::now()).unwrap();

        let event = doc.event(&id).unwrap();
        assert_eq!(event.status, EventStatus::Approved);
        assert!(event.approved_at.is_some() && event.rejected_at.is_none());

        let err = decide_event(&mut doc, &id, EventDecision::Reject, &uid("2"), Timestamp::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EventAlreadyDecided);
        assert_eq!(doc.event(&id).unwrap().status, EventStatus::Approved);
    }

    #[test]
    fn reject_sets_rejected_at_only() {
        let mut doc = bootstrap_document();
        let id = proposed(&mut doc);
        let outcome =
            decide_event(&mut doc, &id, EventDecision::Reject, &uid("2"), Timestamp::now()).unwrap();
        assert!(matches!(outcome, EventDecisionOutcome::Rejected(_)));
        let event = doc.event(&id).unwrap();
        assert!(event.rejected_at.is_some() && event.approved_at.is_none());
    }

    #[test]
    fn unknown_event_is_not_found() {
        let mut doc = bootstrap_document();
        let err = decide_event(
            &mut doc,
            &ClubEventId::new("nope").unwrap(),
            EventDecision::Approve,
            &uid("2"),
            Timestamp::now(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::EventNotFound);
    }

    #[test]
    fn registration_requires_approved_event() {
        let mut doc = bootstrap_document();
        let id = proposed(&mut doc);
        let err = register_for_event(&mut doc, &id, &uid("3"), Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::EventNotOpen);
    }

    #[test]
    fn register_and_withdraw() {
        let mut doc = bootstrap_document();
        let workshop = ClubEventId::new("1").unwrap();

        let err = register_for_event(&mut doc, &workshop, &uid("3"), Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyRegistered);

        let event = withdraw_registration(&mut doc, &workshop, &uid("3"), Timestamp::now()).unwrap();
        assert!(!event.registered);
        assert!(doc.event(&workshop).unwrap().registered_users.is_empty());

        let err = withdraw_registration(&mut doc, &workshop, &uid("3"), Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotRegistered);

        assert!(register_for_event(&mut doc, &workshop, &uid("3"), Timestamp::now())
            .unwrap()
            .registered);
    }
}
