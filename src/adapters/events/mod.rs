//! Event Publisher Adapters
//!
//! - **InMemoryEventBus** - Captures events for test assertions
//! - **TracingEventPublisher** - Writes each event to the audit log

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemoryEventBus;
pub use tracing_publisher::TracingEventPublisher;
