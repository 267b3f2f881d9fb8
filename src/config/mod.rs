//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `PROFILE_WIZARD` prefix
//! and `__` between nested keys. Every section has defaults, so an empty
//! environment yields a working local setup.
//!
//! # Example
//!
//! ```no_run
//! use profile_wizard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Saving progress under {}", config.storage.data_dir.display());
//! ```

mod error;
mod logging;
mod profile_service;
mod storage;
mod wizard;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use profile_service::ProfileServiceConfig;
pub use storage::StorageConfig;
pub use wizard::WizardConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Local storage for in-progress registrations
    #[serde(default)]
    pub storage: StorageConfig,

    /// Remote profile API
    #[serde(default)]
    pub profile_service: ProfileServiceConfig,

    /// Log level and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Front-end behaviour
    #[serde(default)]
    pub wizard: WizardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present (development)
    /// 2. Reads variables with the `PROFILE_WIZARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// - `PROFILE_WIZARD__STORAGE__DATA_DIR=/var/lib/wizard` -> `storage.data_dir`
    /// - `PROFILE_WIZARD__PROFILE_SERVICE__TIMEOUT_SECS=10` -> `profile_service.timeout_secs`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROFILE_WIZARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.profile_service.validate()?;
        self.logging.validate()?;
        self.wizard.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "PROFILE_WIZARD__STORAGE__DATA_DIR",
        "PROFILE_WIZARD__PROFILE_SERVICE__BASE_URL",
        "PROFILE_WIZARD__PROFILE_SERVICE__API_TOKEN",
        "PROFILE_WIZARD__PROFILE_SERVICE__TIMEOUT_SECS",
        "PROFILE_WIZARD__LOGGING__FORMAT",
        "PROFILE_WIZARD__WIZARD__COMPLETION_DELAY_MS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.profile_service.timeout_secs, 30);
        assert_eq!(config.wizard.completion_delay_ms, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PROFILE_WIZARD__STORAGE__DATA_DIR", "/tmp/wizard");
        env::set_var("PROFILE_WIZARD__PROFILE_SERVICE__BASE_URL", "https://api.example.com");
        env::set_var("PROFILE_WIZARD__PROFILE_SERVICE__API_TOKEN", "tok_123");
        env::set_var("PROFILE_WIZARD__PROFILE_SERVICE__TIMEOUT_SECS", "10");
        env::set_var("PROFILE_WIZARD__LOGGING__FORMAT", "json");
        env::set_var("PROFILE_WIZARD__WIZARD__COMPLETION_DELAY_MS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/wizard"));
        assert_eq!(config.profile_service.base_url, "https://api.example.com");
        assert_eq!(
            config
                .profile_service
                .api_token
                .as_ref()
                .map(|t| t.expose_secret().as_str()),
            Some("tok_123")
        );
        assert_eq!(config.profile_service.timeout_secs, 10);
        assert_eq!(config.logging.log_format().unwrap(), LogFormat::Json);
        assert_eq!(config.wizard.completion_delay_ms, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PROFILE_WIZARD__PROFILE_SERVICE__TIMEOUT_SECS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }
}
