//! Audit-log publisher: every event becomes one structured `info!` record.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Publishes events to the `audit` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        info!(
            target: "audit",
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_type = %event.aggregate_type,
            aggregate_id = %event.aggregate_id,
            user_id = event.metadata.user_id.as_deref().unwrap_or("anonymous"),
            correlation_id = event.metadata.correlation_id.as_deref().unwrap_or(""),
            payload = %event.payload,
            "Domain event"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventId, EventMetadata, Timestamp};

    #[tokio::test]
    async fn publish_always_succeeds() {
        let publisher = TracingEventPublisher::new();
        let envelope = EventEnvelope {
            event_id: EventId::new(),
            event_type: "user.signed_in.v1".to_string(),
            schema_version: 1,
            aggregate_id: "3".to_string(),
            aggregate_type: "User".to_string(),
            occurred_at: Timestamp::now(),
            payload: serde_json::json!({ "user_id": "3" }),
            metadata: EventMetadata::default(),
        };

        assert!(publisher.publish(envelope).await.is_ok());
    }
}
