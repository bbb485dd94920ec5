//! Membership lifecycle events.
//!
//! - `JoinRequested` - Student asked to join a club
//! - `JoinRequestApproved` - Request approved, membership created
//! - `JoinRequestRejected` - Request rejected
//! - `MemberRoleChanged` - Member's role replaced
//! - `MemberRemoved` - Membership deleted

use serde::{Deserialize, Serialize};

use crate::domain::club::MemberRole;
use crate::domain::foundation::{domain_event, ClubId, EventId, JoinRequestId, Timestamp, UserId};

// ════════════════════════════════════════════════════════════════════════════
// JoinRequested
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequested {
    pub event_id: EventId,
    pub request_id: JoinRequestId,
    pub user_id: UserId,
    pub club_id: ClubId,
    pub requested_at: Timestamp,
}

domain_event!(
    JoinRequested,
    event_type = "join_request.created.v1",
    schema_version = 1,
    aggregate_id = request_id,
    aggregate_type = "JoinRequest",
    occurred_at = requested_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// JoinRequestApproved
// ════════════════════════════════════════════════════════════════════════════

/// Published when a coordinator approves a request. The membership exists
/// from this point on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequestApproved {
    pub event_id: EventId,
    pub request_id: JoinRequestId,
    pub user_id: UserId,
    pub club_id: ClubId,
    pub assigned_role: MemberRole,
    pub responded_by: UserId,
    pub approved_at: Timestamp,
}

domain_event!(
    JoinRequestApproved,
    event_type = "join_request.approved.v1",
    schema_version = 1,
    aggregate_id = request_id,
    aggregate_type = "JoinRequest",
    occurred_at = approved_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// JoinRequestRejected
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequestRejected {
    pub event_id: EventId,
    pub request_id: JoinRequestId,
    pub user_id: UserId,
    pub club_id: ClubId,
    pub responded_by: UserId,
    pub rejected_at: Timestamp,
}

domain_event!(
    JoinRequestRejected,
    event_type = "join_request.rejected.v1",
    schema_version = 1,
    aggregate_id = request_id,
    aggregate_type = "JoinRequest",
    occurred_at = rejected_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// MemberRoleChanged
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRoleChanged {
    pub event_id: EventId,
    pub user_id: UserId,
    pub club_id: ClubId,
    pub old_role: MemberRole,
    pub new_role: MemberRole,
    pub changed_by: UserId,
    pub changed_at: Timestamp,
}

domain_event!(
    MemberRoleChanged,
    event_type = "membership.role_changed.v1",
    schema_version = 1,
    aggregate_id = club_id,
    aggregate_type = "Club",
    occurred_at = changed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// MemberRemoved
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRemoved {
    pub event_id: EventId,
    pub user_id: UserId,
    pub club_id: ClubId,
    pub removed_by: UserId,
    pub removed_at: Timestamp,
}

domain_event!(
    MemberRemoved,
    event_type = "membership.removed.v1",
    schema_version = 1,
    aggregate_id = club_id,
    aggregate_type = "Club",
    occurred_at = removed_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::BaseRole;
    use crate::domain::foundation::SerializableDomainEvent;

    #[test]
    fn approval_payload_carries_stored_role_string() {
        let event = JoinRequestApproved {
            event_id: EventId::new(),
            request_id: JoinRequestId::new("r1").unwrap(),
            user_id: UserId::new("3").unwrap(),
            club_id: ClubId::new("1").unwrap(),
            assigned_role: BaseRole::Secretary.into(),
            responded_by: UserId::new("2").unwrap(),
            approved_at: Timestamp::now(),
        };
        let envelope = event.to_envelope().unwrap();
        assert_eq!(envelope.event_type, "join_request.approved.v1");
        assert_eq!(envelope.aggregate_id, "r1");
        assert_eq!(envelope.payload["assigned_role"], "secretary");
    }
}
