//! Authorization result type.
//!
//! The access policy returns an `AuthorizationResult` rather than a bare
//! boolean so that denials carry enough context to log and to turn into a
//! `Forbidden`/`Unauthorized` domain error.

use super::{DomainError, ErrorCode};

/// Result of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationResult {
    /// Whether access was granted.
    pub granted: bool,

    /// The operation being attempted (e.g., "respond_to_join_request").
    pub operation: &'static str,

    /// The resource being accessed (e.g., "club:1").
    pub resource: String,

    /// The actor that requested access ("anonymous" when signed out).
    pub actor: String,

    /// Reason for denial (if denied).
    pub denial_reason: Option<String>,

    /// True when the denial is because nobody is signed in.
    pub unauthenticated: bool,
}

impl AuthorizationResult {
    /// Creates a successful authorization result.
    pub fn granted(
        operation: &'static str,
        resource: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            granted: true,
            operation,
            resource: resource.into(),
            actor: actor.into(),
            denial_reason: None,
            unauthenticated: false,
        }
    }

    /// Creates a denied authorization result.
    pub fn denied(
        operation: &'static str,
        resource: impl Into<String>,
        actor: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            granted: false,
            operation,
            resource: resource.into(),
            actor: actor.into(),
            denial_reason: Some(reason.into()),
            unauthenticated: false,
        }
    }

    /// Marks a denial as caused by a missing sign-in.
    pub fn unauthenticated(mut self) -> Self {
        self.unauthenticated = true;
        self
    }

    /// Converts this result to a `Result<(), DomainError>`.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.granted {
            return Ok(());
        }

        let code = if self.unauthenticated {
            ErrorCode::Unauthorized
        } else {
            ErrorCode::Forbidden
        };

        Err(DomainError::new(
            code,
            self.denial_reason
                .unwrap_or_else(|| "Access denied".to_string()),
        )
        .with_detail("operation", self.operation)
        .with_detail("resource", self.resource)
        .with_detail("actor", self.actor))
    }

    /// Returns true if access was granted.
    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// Returns true if access was denied.
    pub fn is_denied(&self) -> bool {
        !self.granted
    }
}
