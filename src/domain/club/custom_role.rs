//! Club-specific roles defined by the coordinator.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClubId, CustomRoleId, Timestamp, ValidationError};

use super::BaseRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRole {
    pub id: CustomRoleId,
    pub club_id: ClubId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: Timestamp,
}

impl CustomRole {
    /// Validates the name. Uniqueness within the club is checked by the caller,
    /// which sees the club's other roles.
    pub fn define(
        id: CustomRoleId,
        club_id: ClubId,
        name: &str,
        description: &str,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if BaseRole::parse(name).is_some() {
            return Err(ValidationError::invalid_format(
                "name",
                format!("'{}' is a built-in role", name),
            ));
        }
        Ok(Self {
            id,
            club_id,
            name: name.to_string(),
            description: description.trim().to_string(),
            created_at,
        })
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}
