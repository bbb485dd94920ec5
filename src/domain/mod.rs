//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, events, state machines)
//! - `user` - Accounts, roles and PINs
//! - `club` - Clubs, memberships and club roles
//! - `membership` - Join requests and the membership lifecycle
//! - `club_event` - Event proposals, decisions and registrations
//! - `access` - Role-based access policy
//! - `directory` - User and club administration, cascading deletes
//! - `store` - The persisted document, normalization and seed data
//! - `dashboard` - Read models and export

pub mod access;
pub mod club;
pub mod club_event;
pub mod dashboard;
pub mod directory;
pub mod foundation;
pub mod membership;
pub mod store;
pub mod user;
