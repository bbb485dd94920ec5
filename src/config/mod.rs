//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `CAMPUS_CLUBS` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use campus_clubs::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Data file: {}", config.storage.data_path.display());
//! ```

mod error;
mod logging;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Application environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    /// Document storage (data file path)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CAMPUS_CLUBS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CAMPUS_CLUBS__STORAGE__DATA_PATH=/var/lib/campus.json` -> `storage.data_path`
    /// - `CAMPUS_CLUBS__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("CAMPUS_CLUBS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::Path;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CAMPUS_CLUBS__STORAGE__DATA_PATH");
        env::remove_var("CAMPUS_CLUBS__LOGGING__LEVEL");
        env::remove_var("CAMPUS_CLUBS__LOGGING__JSON");
        env::remove_var("CAMPUS_CLUBS__ENVIRONMENT");
    }

    #[test]
    fn loads_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(
            config.storage.data_path(),
            Path::new("./data/campus_life_data.json")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CAMPUS_CLUBS__STORAGE__DATA_PATH", "/tmp/campus/data.json");
        env::set_var("CAMPUS_CLUBS__LOGGING__JSON", "true");
        env::set_var("CAMPUS_CLUBS__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.data_path(), Path::new("/tmp/campus/data.json"));
        assert!(config.logging.json);
        assert!(config.is_production());
    }

    #[test]
    fn validate_reports_first_problem() {
        let mut config = AppConfig::default();
        config.logging.level = String::new();

        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("logging.level"))
        );
    }
}
