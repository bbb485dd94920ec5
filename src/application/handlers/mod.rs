//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Commands
//! run inside `DomainStore::transact`; queries read one snapshot.

pub mod account;
pub mod admin;
pub mod club;
pub mod club_event;
pub mod dashboard;
pub mod membership;

mod support;
