//! Club entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClubId, Timestamp, UserId, ValidationError};

/// A student club, owned by exactly one coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub coordinator_id: UserId,
    pub created_by: UserId,
    pub created_at: Timestamp,
}

/// Input for creating a club.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClub {
    pub name: String,
    pub description: String,
    pub category: String,
    pub image: Option<String>,
}

/// Placeholder picture for clubs created without one.
pub const DEFAULT_CLUB_IMAGE: &str =
    "https://images.unsplash.com/photo-1523580494863-6f3031224c94?w=800&auto=format&fit=crop";

impl Club {
    pub fn create(
        id: ClubId,
        input: NewClub,
        coordinator_id: UserId,
        created_by: UserId,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let category = input.category.trim();
        if category.is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        let image = input
            .image
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| DEFAULT_CLUB_IMAGE.to_string());

        Ok(Self {
            id,
            name: name.to_string(),
            description: input.description.trim().to_string(),
            category: category.to_string(),
            image,
            coordinator_id,
            created_by,
            created_at,
        })
    }

    pub fn is_coordinated_by(&self, user_id: &UserId) -> bool {
        &self.coordinator_id == user_id
    }

    pub fn set_image(&mut self, image: &str) -> Result<(), ValidationError> {
        let image = image.trim();
        if image.is_empty() {
            return Err(ValidationError::empty_field("image"));
        }
        self.image = image.to_string();
        Ok(())
    }

    /// Case-insensitive substring match over name, category and description.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}
