//! Directory module - user and club administration.
//!
//! - `accounts` - create, sign up, update profile, PIN login and change
//! - `clubs` - create club, update club image
//! - `cascade` - user and club deletion

mod accounts;
mod cascade;
mod clubs;

pub use accounts::{authenticate, change_pin, create_user, sign_up, update_profile};
pub use cascade::{delete_club, delete_user};
pub use clubs::{create_club, update_club_image};
