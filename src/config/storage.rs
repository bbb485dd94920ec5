//! Storage configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the campus document is kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the whole dataset
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

impl StorageConfig {
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_path"));
        }
        if self.data_path.is_dir() {
            return Err(ValidationError::DataPathIsDirectory(
                self.data_path.display().to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data/campus_life_data.json")
}
