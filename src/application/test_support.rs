//! Fixtures shared by handler tests.

use std::sync::Arc;

use crate::adapters::events::InMemoryEventBus;
use crate::adapters::storage::InMemoryDocumentStore;
use crate::domain::foundation::{ClubId, CommandMetadata, UserId};
use crate::domain::store::{bootstrap_document, Document};
use crate::ports::EventPublisher;

use super::DomainStore;

pub const ADMIN: &str = "1";
pub const COORDINATOR: &str = "2";
pub const STUDENT: &str = "3";
pub const CLUB: &str = "1";

/// A domain store over the seed dataset plus a capturing event bus.
pub struct TestContext {
    pub documents: InMemoryDocumentStore,
    pub store: Arc<DomainStore>,
    pub bus: Arc<InMemoryEventBus>,
}

impl TestContext {
    pub fn seeded() -> Self {
        Self::with_document(bootstrap_document())
    }

    pub fn with_document(document: Document) -> Self {
        let documents = InMemoryDocumentStore::with_document(document);
        let store = Arc::new(DomainStore::new(Arc::new(documents.clone())));
        Self {
            documents,
            store,
            bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    pub fn publisher(&self) -> Arc<dyn EventPublisher> {
        self.bus.clone()
    }

    pub async fn document(&self) -> Document {
        self.store.snapshot().await.unwrap()
    }
}

pub fn as_user(id: &str) -> CommandMetadata {
    CommandMetadata::new(UserId::new(id).unwrap()).with_correlation_id("test-correlation")
}

pub fn anonymous() -> CommandMetadata {
    CommandMetadata::anonymous().with_correlation_id("test-correlation")
}

pub fn user_id(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub fn club_id(id: &str) -> ClubId {
    ClubId::new(id).unwrap()
}
