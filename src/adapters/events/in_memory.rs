//! In-memory event bus for tests.
//!
//! Keeps every envelope it is handed, in publish order, so handler tests can
//! assert on what a command emitted. Lock poisoning panics; the bus is never
//! wired into the binary.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// Capturing publisher.
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// handler.handle(cmd, metadata).await?;
/// assert!(bus.has_event("join_request.approved.v1"));
/// ```
#[derive(Default)]
pub struct InMemoryEventBus {
    captured: RwLock<Vec<EventEnvelope>>,
    unavailable: AtomicBool,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, `publish` fails and nothing is captured.
    pub fn fail_publishes(&self, fail: bool) {
        self.unavailable.store(fail, Ordering::SeqCst);
    }

    fn inspect<R>(&self, f: impl FnOnce(&[EventEnvelope]) -> R) -> R {
        let captured = self.captured.read().expect("event bus lock poisoned");
        f(&captured)
    }

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.inspect(|events| events.to_vec())
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.inspect(|events| {
            events
                .iter()
                .filter(|e| e.event_type == event_type)
                .cloned()
                .collect()
        })
    }

    pub fn event_count(&self) -> usize {
        self.inspect(|events| events.len())
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.inspect(|events| events.iter().any(|e| e.event_type == event_type))
    }

    pub fn clear(&self) {
        self.captured.write().expect("event bus lock poisoned").clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Event bus unavailable for {}", event.event_type),
            ));
        }
        self.captured
            .write()
            .expect("event bus lock poisoned")
            .push(event);
        Ok(())
    }
}
