//! User module - accounts, roles and sign-in PINs.
//!
//! # Module Structure
//!
//! - `user` - User entity, `Role`, profile input types
//! - `pin` - Four-digit PIN value object and constant-time verification
//! - `events` - Account domain events

pub mod events;
mod pin;
mod user;

pub use events::{PinChanged, ProfileUpdated, UserDeleted, UserRegistered, UserSignedIn};
pub use pin::{verify_pin, Pin, DEFAULT_PIN};
pub use user::{default_avatar, NewUserProfile, ProfileChanges, Role, User};
