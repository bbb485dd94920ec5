//! Club event domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, ClubEventId, ClubId, EventId, Timestamp, UserId};

// ════════════════════════════════════════════════════════════════════════════
// ClubEventProposed
// ════════════════════════════════════════════════════════════════════════════

/// Published when a member proposes an event for their club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubEventProposed {
    pub event_id: EventId,
    pub club_event_id: ClubEventId,
    pub club_id: ClubId,
    pub proposed_by: UserId,
    pub title: String,
    pub proposed_at: Timestamp,
}

domain_event!(
    ClubEventProposed,
    event_type = "club_event.proposed.v1",
    schema_version = 1,
    aggregate_id = club_event_id,
    aggregate_type = "ClubEvent",
    occurred_at = proposed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ClubEventApproved / ClubEventRejected
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubEventApproved {
    pub event_id: EventId,
    pub club_event_id: ClubEventId,
    pub club_id: ClubId,
    pub decided_by: UserId,
    pub approved_at: Timestamp,
}

domain_event!(
    ClubEventApproved,
    event_type = "club_event.approved.v1",
    schema_version = 1,
    aggregate_id = club_event_id,
    aggregate_type = "ClubEvent",
    occurred_at = approved_at,
    event_id = event_id
);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubEventRejected {
    pub event_id: EventId,
    pub club_event_id: ClubEventId,
    pub club_id: ClubId,
    pub decided_by: UserId,
    pub rejected_at: Timestamp,
}

domain_event!(
    ClubEventRejected,
    event_type = "club_event.rejected.v1",
    schema_version = 1,
    aggregate_id = club_event_id,
    aggregate_type = "ClubEvent",
    occurred_at = rejected_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// RegistrationChanged
// ════════════════════════════════════════════════════════════════════════════

/// Published when a student registers for or withdraws from an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationChanged {
    pub event_id: EventId,
    pub club_event_id: ClubEventId,
    pub user_id: UserId,

    /// True for a registration, false for a withdrawal.
    pub registered: bool,

    pub changed_at: Timestamp,
}

domain_event!(
    RegistrationChanged,
    event_type = "club_event.registration_changed.v1",
    schema_version = 1,
    aggregate_id = club_event_id,
    aggregate_type = "ClubEvent",
    occurred_at = changed_at,
    event_id = event_id
);
