//! Membership module - join requests and the membership lifecycle.
//!
//! # Module Structure
//!
//! - `join_request` - JoinRequest aggregate
//! - `status` - JoinRequestStatus state machine
//! - `lifecycle` - request, respond, change role, remove
//! - `custom_roles` - create and delete club-specific roles
//! - `events` - Membership domain events

mod custom_roles;
pub mod events;
mod join_request;
mod lifecycle;
mod status;

pub use custom_roles::{create_custom_role, delete_custom_role};
pub use events::{
    JoinRequestApproved, JoinRequestRejected, JoinRequested, MemberRemoved, MemberRoleChanged,
};
pub use join_request::JoinRequest;
pub use lifecycle::{
    change_role, remove_membership, request_join, respond_to_request, JoinDecision, JoinResponse,
};
pub use status::JoinRequestStatus;
