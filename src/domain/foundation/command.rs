//! Command infrastructure for application handlers.
//!
//! Every handler takes a `CommandMetadata` describing who is acting and how
//! to correlate the resulting events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Metadata context for command handlers.
///
/// `user_id` is `None` for the unauthenticated entry points (login, sign-up,
/// the login profile picker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The signed-in user executing this command.
    pub user_id: Option<UserId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g., "cli", "dashboard").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates metadata for a signed-in user.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            correlation_id: None,
            source: None,
        }
    }

    /// Creates metadata for a caller that has not signed in.
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            correlation_id: None,
            source: None,
        }
    }

    /// Sets an explicit correlation ID.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Sets the command source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if absent.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the source, if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_user() {
        let meta = CommandMetadata::new(UserId::new("3").unwrap());
        assert_eq!(meta.user_id.as_ref().map(UserId::as_str), Some("3"));
    }

    #[test]
    fn anonymous_has_no_user() {
        assert!(CommandMetadata::anonymous().user_id.is_none());
    }

    #[test]
    fn explicit_correlation_id_is_kept() {
        let meta = CommandMetadata::anonymous().with_correlation_id("corr-7");
        assert_eq!(meta.correlation_id(), "corr-7");
    }

    #[test]
    fn missing_correlation_id_is_generated() {
        let meta = CommandMetadata::anonymous();
        assert!(Uuid::parse_str(&meta.correlation_id()).is_ok());
    }

    #[test]
    fn source_is_optional() {
        let meta = CommandMetadata::anonymous().with_source("cli");
        assert_eq!(meta.source(), Some("cli"));
    }
}
