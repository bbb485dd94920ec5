//! File-based Document Store Adapter
//!
//! Stores the whole dataset as a single pretty-printed JSON file. The file
//! path is the storage key.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::domain::store::{bootstrap_document, Document, NormalizationReport};
use crate::ports::{DocumentStore, StorageError};

/// File-based storage for the campus document.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    path: PathBuf,
}

impl FileDocumentStore {
    /// Create a store backed by the JSON file at `path`.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileDocumentStore::new("./data/campus_life_data.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn key(&self) -> String {
        self.path.display().to_string()
    }

    /// Sibling file written first and renamed over the target.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Ensure the parent directory exists
    async fn ensure_parent(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir)
                    .await
                    .map_err(|e| StorageError::WriteFailed {
                        key: self.key(),
                        reason: e.to_string(),
                    })
            }
            _ => Ok(()),
        }
    }

    async fn write(&self, document: &Document) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        self.ensure_parent().await?;

        let temp = self.temp_path();
        let write_failed = |e: std::io::Error| StorageError::WriteFailed {
            key: self.key(),
            reason: e.to_string(),
        };

        fs::write(&temp, json).await.map_err(write_failed)?;
        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(write_failed(e));
        }

        debug!(path = %self.path.display(), "Document written");
        Ok(())
    }
}

fn log_report(report: &NormalizationReport) {
    for warning in &report.warnings {
        warn!(warning = %warning, "Document normalization");
    }
    if !report.is_clean() {
        info!(
            resolved_roles = report.resolved_roles,
            migrated_pins = report.migrated_pins,
            dropped_pins = report.dropped_pins,
            duplicate_memberships = report.duplicate_memberships,
            duplicate_registrations = report.duplicate_registrations,
            "Document normalized"
        );
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn load(&self) -> Result<Document, StorageError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No stored document, writing bootstrap seed");
                return self.save(bootstrap_document()).await;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Stored document unreadable, using seed");
                return Ok(bootstrap_document());
            }
        };

        match serde_json::from_str::<Document>(&raw) {
            Ok(mut document) => {
                log_report(&document.normalize());
                Ok(document)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Stored document corrupt, using seed");
                Ok(bootstrap_document())
            }
        }
    }

    async fn save(&self, mut document: Document) -> Result<Document, StorageError> {
        log_report(&document.normalize());
        self.write(&document).await?;
        Ok(document)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                info!(path = %self.path.display(), "Stored document removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::ClearFailed {
                key: self.key(),
                reason: e.to_string(),
            }),
        }
    }
}
