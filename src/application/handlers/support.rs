//! Shared plumbing for handlers: caller resolution, access checks and
//! post-commit event publication.

use tracing::warn;

use crate::domain::access::{authorize, Actor, ClubFacts, Operation, Resource};
use crate::domain::foundation::{
    ClubId, CommandMetadata, DomainError, ErrorCode, EventEnvelope, SerializableDomainEvent,
    UserId,
};
use crate::domain::store::Document;
use crate::ports::EventPublisher;

/// Checks `operation` for the caller named in `metadata`.
///
/// Returns the caller's id. Public operations may return `None`.
pub(crate) fn authorize_caller(
    doc: &Document,
    metadata: &CommandMetadata,
    operation: Operation,
    resource: &Resource,
) -> Result<Option<UserId>, DomainError> {
    let actor = Actor::resolve(doc, metadata.user_id.as_ref());
    let decision = authorize(&actor, operation, resource);
    if decision.is_denied() {
        warn!(
            operation = decision.operation,
            actor = %decision.actor,
            resource = %decision.resource,
            reason = decision.denial_reason.as_deref().unwrap_or(""),
            "Access denied"
        );
    }
    decision.into_result()?;
    Ok(actor.id().cloned())
}

/// Like `authorize_caller` for operations that always need a signed-in caller.
pub(crate) fn authorize_signed_in(
    doc: &Document,
    metadata: &CommandMetadata,
    operation: Operation,
    resource: &Resource,
) -> Result<UserId, DomainError> {
    authorize_caller(doc, metadata, operation, resource)?
        .ok_or_else(|| DomainError::new(ErrorCode::Unauthorized, "Sign in to continue"))
}

/// Club-scoped access check.
pub(crate) fn authorize_for_club(
    doc: &Document,
    metadata: &CommandMetadata,
    operation: Operation,
    club_id: &ClubId,
) -> Result<UserId, DomainError> {
    let actor = Actor::resolve(doc, metadata.user_id.as_ref());
    let club = doc.require_club(club_id)?;
    let resource = Resource::Club(ClubFacts::of(doc, club, &actor));
    authorize_signed_in(doc, metadata, operation, &resource)
}

/// Events produced by one command, published once the document is saved.
pub(crate) struct PendingEvents {
    correlation_id: String,
    user_id: Option<String>,
    envelopes: Vec<EventEnvelope>,
}

impl PendingEvents {
    pub(crate) fn new(metadata: &CommandMetadata) -> Self {
        Self {
            correlation_id: metadata.correlation_id(),
            user_id: metadata.user_id.as_ref().map(UserId::to_string),
            envelopes: Vec::new(),
        }
    }

    pub(crate) fn record<E: SerializableDomainEvent>(&mut self, event: &E) {
        match event.to_envelope() {
            Ok(envelope) => {
                let envelope = envelope.with_correlation_id(self.correlation_id.clone());
                let envelope = match &self.user_id {
                    Some(user_id) => envelope.with_user_id(user_id.clone()),
                    None => envelope,
                };
                self.envelopes.push(envelope);
            }
            Err(err) => warn!(event_type = event.event_type(), error = %err, "Event dropped"),
        }
    }

    /// Publishes everything recorded. Failures are logged; the change they
    /// describe is already saved.
    pub(crate) async fn publish(self, publisher: &dyn EventPublisher) {
        let Self {
            correlation_id,
            envelopes,
            ..
        } = self;
        if envelopes.is_empty() {
            return;
        }
        let count = envelopes.len();
        if let Err(err) = publisher.publish_all(envelopes).await {
            warn!(
                correlation_id = %correlation_id,
                count,
                error = %err,
                "Event publication failed after commit"
            );
        }
    }
}

/// Records and publishes a single event.
pub(crate) async fn publish_event<E: SerializableDomainEvent>(
    publisher: &dyn EventPublisher,
    metadata: &CommandMetadata,
    event: &E,
) {
    let mut pending = PendingEvents::new(metadata);
    pending.record(event);
    pending.publish(publisher).await;
}
