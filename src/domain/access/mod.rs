//! Access module - who may do what.

mod actor;
mod policy;

pub use actor::Actor;
pub use policy::{authorize, ClubFacts, Operation, Resource};
