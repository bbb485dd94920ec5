//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Broad failure categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An id could not be resolved.
    NotFound,
    /// The operation collides with existing state.
    Conflict,
    /// The actor is unknown or lacks permission.
    Authorization,
    /// Input was malformed.
    Validation,
    /// The document could not be read or written.
    Persistence,
    /// Anything else.
    Internal,
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,
    InvalidRole,
    PinMismatch,

    // Not found errors
    UserNotFound,
    ClubNotFound,
    EventNotFound,
    JoinRequestNotFound,
    MembershipNotFound,
    CustomRoleNotFound,
    NotRegistered,

    // Conflict errors
    EmailTaken,
    DuplicatePendingRequest,
    AlreadyMember,
    MembershipExists,
    RequestAlreadyResolved,
    EventAlreadyDecided,
    EventNotOpen,
    AlreadyRegistered,
    CoordinatorAlreadyAssigned,
    CustomRoleExists,
    CustomRoleInUse,
    InvalidStateTransition,

    // Authorization errors
    Unauthorized,
    Forbidden,
    InvalidPin,

    // Infrastructure errors
    StorageError,
    SerializationError,
    InternalError,
}

impl ErrorCode {
    /// Category this code belongs to.
    pub fn kind(&self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            ValidationFailed | EmptyField | InvalidFormat | InvalidRole | PinMismatch => {
                ErrorKind::Validation
            }
            UserNotFound | ClubNotFound | EventNotFound | JoinRequestNotFound
            | MembershipNotFound | CustomRoleNotFound | NotRegistered => ErrorKind::NotFound,
            EmailTaken | DuplicatePendingRequest | AlreadyMember | MembershipExists
            | RequestAlreadyResolved | EventAlreadyDecided | EventNotOpen | AlreadyRegistered
            | CoordinatorAlreadyAssigned | CustomRoleExists | CustomRoleInUse
            | InvalidStateTransition => ErrorKind::Conflict,
            Unauthorized | Forbidden | InvalidPin => ErrorKind::Authorization,
            StorageError | SerializationError => ErrorKind::Persistence,
            InternalError => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidRole => "INVALID_ROLE",
            ErrorCode::PinMismatch => "PIN_MISMATCH",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::ClubNotFound => "CLUB_NOT_FOUND",
            ErrorCode::EventNotFound => "EVENT_NOT_FOUND",
            ErrorCode::JoinRequestNotFound => "JOIN_REQUEST_NOT_FOUND",
            ErrorCode::MembershipNotFound => "MEMBERSHIP_NOT_FOUND",
            ErrorCode::CustomRoleNotFound => "CUSTOM_ROLE_NOT_FOUND",
            ErrorCode::NotRegistered => "NOT_REGISTERED",
            ErrorCode::EmailTaken => "EMAIL_TAKEN",
            ErrorCode::DuplicatePendingRequest => "DUPLICATE_PENDING_REQUEST",
            ErrorCode::AlreadyMember => "ALREADY_MEMBER",
            ErrorCode::MembershipExists => "MEMBERSHIP_EXISTS",
            ErrorCode::RequestAlreadyResolved => "REQUEST_ALREADY_RESOLVED",
            ErrorCode::EventAlreadyDecided => "EVENT_ALREADY_DECIDED",
            ErrorCode::EventNotOpen => "EVENT_NOT_OPEN",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::CoordinatorAlreadyAssigned => "COORDINATOR_ALREADY_ASSIGNED",
            ErrorCode::CustomRoleExists => "CUSTOM_ROLE_EXISTS",
            ErrorCode::CustomRoleInUse => "CUSTOM_ROLE_IN_USE",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::InvalidPin => "INVALID_PIN",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Creates a not-found error for an entity id.
    pub fn not_found(code: ErrorCode, entity: &str, id: impl fmt::Display) -> Self {
        Self::new(code, format!("{} not found: {}", entity, id))
            .with_detail("id", id.to_string())
    }

    /// Creates a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        match &err {
            ValidationError::EmptyField { field } => {
                DomainError::new(ErrorCode::EmptyField, err.to_string())
                    .with_detail("field", field.clone())
            }
            ValidationError::InvalidFormat { field, .. } => {
                DomainError::new(ErrorCode::InvalidFormat, err.to_string())
                    .with_detail("field", field.clone())
            }
        }
    }
}
