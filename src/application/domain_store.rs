//! DomainStore - load, mutate a working copy, flush as one unit.
//!
//! Every write goes through `transact`: the document is loaded from the
//! gateway, the mutation runs against the loaded copy, and only a mutation
//! that succeeds is saved. A failed mutation or a failed save leaves the
//! stored document as it was.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::store::Document;
use crate::ports::DocumentStore;

/// The result of a committed mutation, with the document as saved.
#[derive(Debug, Clone)]
pub struct Committed<T> {
    pub value: T,
    pub document: Document,
}

/// Serialises whole-document operations within one process.
pub struct DomainStore {
    gateway: Arc<dyn DocumentStore>,
    gate: Mutex<()>,
}

impl DomainStore {
    pub fn new(gateway: Arc<dyn DocumentStore>) -> Self {
        Self {
            gateway,
            gate: Mutex::new(()),
        }
    }

    /// Reads the current document.
    pub async fn snapshot(&self) -> Result<Document, DomainError> {
        let _guard = self.gate.lock().await;
        Ok(self.gateway.load().await?)
    }

    /// Applies `mutate` to a working copy and saves the result.
    pub async fn transact<T, F>(&self, mutate: F) -> Result<Committed<T>, DomainError>
    where
        T: Send,
        F: FnOnce(&mut Document) -> Result<T, DomainError> + Send,
    {
        let _guard = self.gate.lock().await;
        let mut working = self.gateway.load().await?;

        let value = match mutate(&mut working) {
            Ok(value) => value,
            Err(err) => {
                debug!(code = %err.code, "Mutation rejected, working copy dropped");
                return Err(err);
            }
        };

        let document = self.gateway.save(working).await?;
        Ok(Committed { value, document })
    }

    /// Wipes persisted state and returns the freshly seeded document.
    pub async fn reset(&self) -> Result<Document, DomainError> {
        let _guard = self.gate.lock().await;
        self.gateway.clear().await?;
        Ok(self.gateway.load().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDocumentStore;
    use crate::domain::foundation::ErrorCode;

    fn store_over(documents: &InMemoryDocumentStore) -> DomainStore {
        DomainStore::new(Arc::new(documents.clone()))
    }

    #[tokio::test]
    async fn transact_saves_successful_mutation() {
        let documents = InMemoryDocumentStore::new();
        let store = store_over(&documents);

        let committed = store
            .transact(|doc| {
                doc.clubs.clear();
                Ok(doc.users.len())
            })
            .await
            .unwrap();

        assert_eq!(committed.value, 3);
        assert!(committed.document.clubs.is_empty());
        assert!(documents.snapshot().await.unwrap().clubs.is_empty());
    }

    #[tokio::test]
    async fn failed_mutation_leaves_store_untouched() {
        let documents = InMemoryDocumentStore::new();
        let store = store_over(&documents);
        let before = store.snapshot().await.unwrap();

        let err = store
            .transact(|doc| -> Result<(), DomainError> {
                doc.clubs.clear();
                Err(DomainError::forbidden("no"))
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(documents.snapshot().await.unwrap(), before);
    }

    #[tokio::test]
    async fn failed_save_rolls_back() {
        let documents = InMemoryDocumentStore::new();
        let store = store_over(&documents);
        let before = store.snapshot().await.unwrap();
        documents.fail_writes(true);

        let err = store
            .transact(|doc| {
                doc.users.clear();
                Ok(())
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(documents.snapshot().await.unwrap(), before);
    }

    #[tokio::test]
    async fn reset_reseeds() {
        let documents = InMemoryDocumentStore::new();
        let store = store_over(&documents);
        store
            .transact(|doc| {
                doc.users.clear();
                Ok(())
            })
            .await
            .unwrap();

        let document = store.reset().await.unwrap();

        assert_eq!(document.users.len(), 3);
    }
}
