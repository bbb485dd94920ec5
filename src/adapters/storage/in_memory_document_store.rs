//! In-Memory Document Store Adapter
//!
//! Keeps the document in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::store::{bootstrap_document, Document};
use crate::ports::{DocumentStore, StorageError};

const KEY: &str = "campus_life_data";

/// In-memory storage for the campus document
#[derive(Debug, Clone)]
pub struct InMemoryDocumentStore {
    document: Arc<RwLock<Option<Document>>>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryDocumentStore {
    /// Create an empty store; the first load yields the seed.
    pub fn new() -> Self {
        Self {
            document: Arc::new(RwLock::new(None)),
            fail_writes: Arc::new(AtomicBool::new(false)),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a store that already holds `document`.
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(document))),
            ..Self::new()
        }
    }

    /// Make every subsequent save fail (simulates a full disk).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Returns the stored document without seeding.
    pub async fn snapshot(&self) -> Option<Document> {
        self.document.read().await.clone()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn load(&self) -> Result<Document, StorageError> {
        if let Some(document) = self.document.read().await.clone() {
            return Ok(document);
        }
        self.save(bootstrap_document()).await
    }

    async fn save(&self, mut document: Document) -> Result<Document, StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed {
                key: KEY.to_string(),
                reason: "writes disabled".to_string(),
            });
        }
        document.normalize();
        *self.document.write().await = Some(document.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(document)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.document.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_load_stores_seed() {
        let store = InMemoryDocumentStore::new();

        let document = store.load().await.unwrap();

        assert_eq!(document.users.len(), 3);
        assert_eq!(store.snapshot().await, Some(document));
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn with_document_serves_it_without_seeding() {
        let mut doc = Document::default();
        doc.pins.insert("7".to_string(), "1234".to_string());
        let store = InMemoryDocumentStore::with_document(doc.clone());

        assert_eq!(store.load().await.unwrap(), doc);
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn failed_save_keeps_previous_document() {
        let store = InMemoryDocumentStore::with_document(Document::default());
        store.fail_writes(true);

        let mut changed = Document::default();
        changed.pins.insert("1".to_string(), "1234".to_string());
        let err = store.save(changed).await.unwrap_err();

        assert!(matches!(err, StorageError::WriteFailed { .. }));
        assert_eq!(store.snapshot().await, Some(Document::default()));
    }

    #[tokio::test]
    async fn clear_forgets_document() {
        let store = InMemoryDocumentStore::with_document(Document::default());
        store.clear().await.unwrap();
        assert_eq!(store.snapshot().await, None);
    }
}
