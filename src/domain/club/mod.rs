//! Club module - clubs, memberships and club roles.
//!
//! # Module Structure
//!
//! - `club` - Club entity
//! - `member_role` - `BaseRole` and the tagged `MemberRole`
//! - `custom_role` - Coordinator-defined roles
//! - `membership` - `ClubMembership` record
//! - `events` - Club domain events

mod club;
mod custom_role;
pub mod events;
mod member_role;
mod membership;

pub use club::{Club, NewClub, DEFAULT_CLUB_IMAGE};
pub use custom_role::CustomRole;
pub use events::{ClubCreated, ClubDeleted, ClubImageUpdated, CustomRoleCreated, CustomRoleDeleted};
pub use member_role::{BaseRole, MemberRole};
pub use membership::ClubMembership;
