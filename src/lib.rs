//! Campus Clubs - club management for a college campus
//!
//! Admins, coordinators and students share one dataset of users, clubs,
//! events, memberships and join requests. The crate implements the
//! membership and join-request lifecycle, the event proposal lifecycle and
//! the role-based access policy around them, persisting everything as a
//! single JSON document.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
