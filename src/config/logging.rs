//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Output format for log events
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_level")]
    pub level: String,

    /// "pretty" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoggingConfig {
    /// Parsed output format
    pub fn log_format(&self) -> Result<LogFormat, ValidationError> {
        match self.format.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ValidationError::InvalidLogFormat(other.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("LOGGING__LEVEL"));
        }
        self.log_format().map(|_| ())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "warn,profile_wizard=info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}
