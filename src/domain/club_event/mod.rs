//! Club event module - proposals, decisions and registrations.
//!
//! # Module Structure
//!
//! - `aggregate` - ClubEvent aggregate
//! - `status` - EventStatus state machine
//! - `lifecycle` - propose, decide, register, withdraw
//! - `events` - Club event domain events

mod aggregate;
pub mod events;
mod lifecycle;
mod status;

pub use aggregate::{ClubEvent, EventDetails, EventLink};
pub use events::{ClubEventApproved, ClubEventProposed, ClubEventRejected, RegistrationChanged};
pub use lifecycle::{
    decide_event, propose_event, register_for_event, withdraw_registration, EventDecision,
    EventDecisionOutcome,
};
pub use status::EventStatus;
