//! Strongly-typed identifier value objects.
//!
//! Every entity in the campus document is keyed by an opaque string. Stored
//! documents created by earlier versions use short numeric strings ("1",
//! "2", ...) while new records receive UUID v4 strings; both forms are valid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier, returning error if empty.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Generates a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Identifier for a built-in record. `id` must be non-empty.
            #[allow(dead_code)]
            pub(crate) fn seeded(id: &'static str) -> Self {
                Self(id.to_string())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a user account (admin, coordinator or student).
    UserId,
    "user_id"
);

string_id!(
    /// Identifier of a club.
    ClubId,
    "club_id"
);

string_id!(
    /// Identifier of a club event (workshop, meetup, ...).
    ClubEventId,
    "event_id"
);

string_id!(
    /// Identifier of a join request.
    JoinRequestId,
    "request_id"
);

string_id!(
    /// Identifier of a club-scoped custom role.
    CustomRoleId,
    "custom_role_id"
);
