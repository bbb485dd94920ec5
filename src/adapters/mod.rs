//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Document stores (JSON file, in-memory)
//! - `events` - Event publishers (in-memory capture, tracing audit log)

pub mod events;
pub mod storage;

pub use events::{InMemoryEventBus, TracingEventPublisher};
pub use storage::{FileDocumentStore, InMemoryDocumentStore};
