//! DocumentStore port - load, save and clear the persisted document.
//!
//! The whole dataset lives in one document under one key. Adapters decide
//! what the key is (a file path, a map slot) and how bytes reach storage.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::store::Document;

/// Errors raised by document store adapters.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Failed to write {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Failed to clear {key}: {reason}")]
    ClearFailed { key: String, reason: String },

    #[error("Failed to serialize document: {0}")]
    SerializationFailed(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        let code = match err {
            StorageError::SerializationFailed(_) => ErrorCode::SerializationError,
            _ => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for the single-document persistence gateway.
///
/// Implementations must ensure:
/// - `load` never fails because the document is missing or unreadable; it
///   returns the bootstrap seed instead (persisting it only when missing)
/// - `save` normalizes, writes the whole document as one unit, and returns
///   what was written
/// - `clear` succeeds when nothing is stored
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the stored document, or the seed on first run.
    async fn load(&self) -> Result<Document, StorageError>;

    /// Normalizes and persists `document`, returning the normalized copy.
    async fn save(&self, document: Document) -> Result<Document, StorageError>;

    /// Removes all persisted state.
    async fn clear(&self) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorKind;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn DocumentStore) {}

    #[test]
    fn storage_errors_are_persistence_errors() {
        let err: DomainError = StorageError::WriteFailed {
            key: "data.json".to_string(),
            reason: "disk full".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.kind(), ErrorKind::Persistence);
        assert!(err.message.contains("disk full"));
    }

    #[test]
    fn serialization_failures_keep_their_code() {
        let err: DomainError = StorageError::SerializationFailed("bad".to_string()).into();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }
}
