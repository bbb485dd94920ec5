//! Club membership record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClubId, Timestamp, UserId};

use super::MemberRole;

/// A user's membership of a club. At most one per (user, club).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMembership {
    pub user_id: UserId,
    pub club_id: ClubId,
    pub joined_at: Timestamp,
    #[serde(default)]
    pub role: MemberRole,
}

impl ClubMembership {
    pub fn new(user_id: UserId, club_id: ClubId, role: MemberRole, joined_at: Timestamp) -> Self {
        Self {
            user_id,
            club_id,
            joined_at,
            role,
        }
    }

    pub fn is_for(&self, user_id: &UserId, club_id: &ClubId) -> bool {
        &self.user_id == user_id && &self.club_id == club_id
    }
}
