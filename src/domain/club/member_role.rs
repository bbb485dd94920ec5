//! Roles a member can hold inside a club.
//!
//! On disk a role is a plain string: base roles by name, custom roles as
//! `custom:<id>`. Anything else is kept as `Legacy` until normalization
//! resolves it against the club's custom roles.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::CustomRoleId;

const CUSTOM_PREFIX: &str = "custom:";

/// Built-in club roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseRole {
    VicePresident,
    Secretary,
    Treasurer,
    Member,
}

impl BaseRole {
    /// Ordered by seniority.
    pub const ALL: [BaseRole; 4] = [
        BaseRole::VicePresident,
        BaseRole::Secretary,
        BaseRole::Treasurer,
        BaseRole::Member,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BaseRole::VicePresident => "vice_president",
            BaseRole::Secretary => "secretary",
            BaseRole::Treasurer => "treasurer",
            BaseRole::Member => "member",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BaseRole::VicePresident => "Vice President",
            BaseRole::Secretary => "Secretary",
            BaseRole::Treasurer => "Treasurer",
            BaseRole::Member => "Member",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BaseRole::VicePresident => "Assists in club leadership and coordination",
            BaseRole::Secretary => "Manages club records and communications",
            BaseRole::Treasurer => "Handles club finances and budget",
            BaseRole::Member => "Regular club member with basic privileges",
        }
    }

    /// Matches the stored name or the display label, ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(raw) || r.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for BaseRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role held by a club member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberRole {
    Base(BaseRole),
    Custom(CustomRoleId),
    /// Unresolved role name read from an older document.
    Legacy(String),
}

impl MemberRole {
    pub fn member() -> Self {
        MemberRole::Base(BaseRole::Member)
    }

    pub fn custom_id(&self) -> Option<&CustomRoleId> {
        match self {
            MemberRole::Custom(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, MemberRole::Legacy(_))
    }

    /// Decodes the stored string form.
    pub fn from_stored(raw: &str) -> Self {
        if let Some(id) = raw.strip_prefix(CUSTOM_PREFIX) {
            if let Ok(id) = CustomRoleId::new(id) {
                return MemberRole::Custom(id);
            }
        }
        match BaseRole::parse(raw) {
            Some(base) => MemberRole::Base(base),
            None => MemberRole::Legacy(raw.to_string()),
        }
    }

    /// Encodes to the stored string form.
    pub fn to_stored(&self) -> String {
        match self {
            MemberRole::Base(base) => base.as_str().to_string(),
            MemberRole::Custom(id) => format!("{}{}", CUSTOM_PREFIX, id),
            MemberRole::Legacy(name) => name.clone(),
        }
    }
}

impl Default for MemberRole {
    fn default() -> Self {
        Self::member()
    }
}

impl From<BaseRole> for MemberRole {
    fn from(base: BaseRole) -> Self {
        MemberRole::Base(base)
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_stored())
    }
}

impl Serialize for MemberRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_stored())
    }
}

impl<'de> Deserialize<'de> for MemberRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(MemberRole::member());
        }
        Ok(MemberRole::from_stored(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_roles_use_snake_case_names() {
        let json = serde_json::to_string(&MemberRole::Base(BaseRole::VicePresident)).unwrap();
        assert_eq!(json, "\"vice_president\"");
    }

    #[test]
    fn custom_roles_are_prefixed() {
        let role = MemberRole::Custom(CustomRoleId::new("42").unwrap());
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"custom:42\"");

        let back: MemberRole = serde_json::from_str("\"custom:42\"").unwrap();
        assert_eq!(back, role);
    }

    #[test]
    fn unknown_names_load_as_legacy() {
        let role: MemberRole = serde_json::from_str("\"Tech Lead\"").unwrap();
        assert_eq!(role, MemberRole::Legacy("Tech Lead".to_string()));
        assert!(role.is_legacy());
    }

    #[test]
    fn empty_string_loads_as_member() {
        let role: MemberRole = serde_json::from_str("\"\"").unwrap();
        assert_eq!(role, MemberRole::member());
    }

    #[test]
    fn parse_accepts_labels() {
        assert_eq!(BaseRole::parse("Vice President"), Some(BaseRole::VicePresident));
        assert_eq!(BaseRole::parse("TREASURER"), Some(BaseRole::Treasurer));
        assert_eq!(BaseRole::parse("captain"), None);
    }

    #[test]
    fn bare_custom_prefix_is_legacy() {
        assert!(MemberRole::from_stored("custom:").is_legacy());
    }
}
