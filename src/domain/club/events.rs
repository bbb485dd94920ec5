//! Club domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, ClubId, CustomRoleId, EventId, Timestamp, UserId};

// ════════════════════════════════════════════════════════════════════════════
// ClubCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when an admin creates a club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubCreated {
    pub event_id: EventId,
    pub club_id: ClubId,
    pub name: String,
    pub coordinator_id: UserId,
    pub created_by: UserId,
    pub created_at: Timestamp,
}

domain_event!(
    ClubCreated,
    event_type = "club.created.v1",
    schema_version = 1,
    aggregate_id = club_id,
    aggregate_type = "Club",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ClubDeleted
// ════════════════════════════════════════════════════════════════════════════

/// Published when a club and everything attached to it is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubDeleted {
    pub event_id: EventId,
    pub club_id: ClubId,
    pub deleted_by: UserId,
    pub removed_memberships: usize,
    pub removed_events: usize,
    pub deleted_at: Timestamp,
}

domain_event!(
    ClubDeleted,
    event_type = "club.deleted.v1",
    schema_version = 1,
    aggregate_id = club_id,
    aggregate_type = "Club",
    occurred_at = deleted_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ClubImageUpdated
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubImageUpdated {
    pub event_id: EventId,
    pub club_id: ClubId,
    pub updated_by: UserId,
    pub image: String,
    pub updated_at: Timestamp,
}

domain_event!(
    ClubImageUpdated,
    event_type = "club.image_updated.v1",
    schema_version = 1,
    aggregate_id = club_id,
    aggregate_type = "Club",
    occurred_at = updated_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// CustomRoleCreated
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRoleCreated {
    pub event_id: EventId,
    pub club_id: ClubId,
    pub role_id: CustomRoleId,
    pub name: String,
    pub created_by: UserId,
    pub created_at: Timestamp,
}

domain_event!(
    CustomRoleCreated,
    event_type = "club.custom_role_created.v1",
    schema_version = 1,
    aggregate_id = club_id,
    aggregate_type = "Club",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// CustomRoleDeleted
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRoleDeleted {
    pub event_id: EventId,
    pub club_id: ClubId,
    pub role_id: CustomRoleId,
    pub deleted_by: UserId,
    pub deleted_at: Timestamp,
}

domain_event!(
    CustomRoleDeleted,
    event_type = "club.custom_role_deleted.v1",
    schema_version = 1,
    aggregate_id = club_id,
    aggregate_type = "Club",
    occurred_at = deleted_at,
    event_id = event_id
);
