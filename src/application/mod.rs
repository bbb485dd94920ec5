//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

mod domain_store;
pub mod handlers;

#[cfg(test)]
pub(crate) mod test_support;

pub use domain_store::{Committed, DomainStore};
