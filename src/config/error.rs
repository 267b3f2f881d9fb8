//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid profile service URL: must start with http:// or https://")]
    InvalidServiceUrl,

    #[error("Profile service URL must use HTTPS when an API token is set")]
    ServiceUrlMustBeHttps,

    #[error("Invalid request timeout (1-120 seconds)")]
    InvalidTimeout,

    #[error("Invalid log format: {0} (expected \"pretty\" or \"json\")")]
    InvalidLogFormat(String),

    #[error("Completion delay exceeds maximum allowed (10000 ms)")]
    CompletionDelayTooLong,
}
