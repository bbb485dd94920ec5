//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentStore` - Single-document persistence gateway
//! - `EventPublisher` - Publishing domain events after a change is saved

mod document_store;
mod event_publisher;

pub use document_store::{DocumentStore, StorageError};
pub use event_publisher::EventPublisher;
