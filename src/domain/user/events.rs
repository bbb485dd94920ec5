//! Account domain events.
//!
//! - `UserRegistered` - Account created by an admin or by sign-up
//! - `UserDeleted` - Account removed together with everything it owned
//! - `ProfileUpdated` - Profile fields changed
//! - `PinChanged` - Sign-in PIN replaced
//! - `UserSignedIn` - PIN login succeeded

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, ClubId, EventId, Timestamp, UserId};

use super::Role;

// ════════════════════════════════════════════════════════════════════════════
// UserRegistered
// ════════════════════════════════════════════════════════════════════════════

/// Published when a new account is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegistered {
    pub event_id: EventId,
    pub user_id: UserId,
    pub role: Role,
    pub email: String,

    /// Admin who created the account; `None` for self sign-up.
    pub registered_by: Option<UserId>,

    pub registered_at: Timestamp,
}

domain_event!(
    UserRegistered,
    event_type = "user.registered.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = registered_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// UserDeleted
// ════════════════════════════════════════════════════════════════════════════

/// Published when an admin deletes an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDeleted {
    pub event_id: EventId,
    pub user_id: UserId,
    pub deleted_by: UserId,

    /// Clubs removed because the user coordinated them.
    pub removed_clubs: Vec<ClubId>,

    pub deleted_at: Timestamp,
}

domain_event!(
    UserDeleted,
    event_type = "user.deleted.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = deleted_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ProfileUpdated
// ════════════════════════════════════════════════════════════════════════════

/// Published when profile fields change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdated {
    pub event_id: EventId,
    pub user_id: UserId,
    pub updated_by: UserId,
    pub updated_at: Timestamp,
}

domain_event!(
    ProfileUpdated,
    event_type = "user.profile_updated.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = updated_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PinChanged
// ════════════════════════════════════════════════════════════════════════════

/// Published when a user replaces their PIN. Never carries the PIN itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinChanged {
    pub event_id: EventId,
    pub user_id: UserId,
    pub changed_at: Timestamp,
}

domain_event!(
    PinChanged,
    event_type = "user.pin_changed.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = changed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// UserSignedIn
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSignedIn {
    pub event_id: EventId,
    pub user_id: UserId,
    pub signed_in_at: Timestamp,
}

domain_event!(
    UserSignedIn,
    event_type = "user.signed_in.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = signed_in_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    #[test]
    fn user_registered_envelope_uses_user_aggregate() {
        let event = UserRegistered {
            event_id: EventId::new(),
            user_id: UserId::new("7").unwrap(),
            role: Role::Student,
            email: "s@college.edu".to_string(),
            registered_by: None,
            registered_at: Timestamp::now(),
        };

        let envelope = event.to_envelope().unwrap();
        assert_eq!(envelope.aggregate_type, "User");
        assert_eq!(envelope.aggregate_id, "7");
        assert_eq!(envelope.payload["role"], "student");
        assert_eq!(event.event_type(), "user.registered.v1");
    }

    #[test]
    fn pin_changed_payload_has_no_pin() {
        let event = PinChanged {
            event_id: EventId::new(),
            user_id: UserId::new("3").unwrap(),
            changed_at: Timestamp::now(),
        };
        let envelope = event.to_envelope().unwrap();
        let payload = envelope.payload.as_object().unwrap();
        assert!(!payload.keys().any(|k| k.contains("pin")));
    }
}
