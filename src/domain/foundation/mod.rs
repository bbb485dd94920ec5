//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors, and event infrastructure
//! that form the vocabulary of the campus clubs domain.

mod authorization;
mod command;
mod errors;
mod events;
mod ids;
mod state_machine;
mod timestamp;

pub use authorization::AuthorizationResult;
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ErrorKind, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{ClubEventId, ClubId, CustomRoleId, JoinRequestId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
