//! Profile service configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Remote profile API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileServiceConfig {
    /// Base URL of the profile API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request
    pub api_token: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ProfileServiceConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn is_local(&self) -> bool {
        let rest = self.base_url.trim_start_matches("http://");
        rest.starts_with("localhost") || rest.starts_with("127.0.0.1")
    }

    /// Validate profile service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let is_http = self.base_url.starts_with("http://");
        if !is_http && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidServiceUrl);
        }
        // Tokens only travel over plain HTTP to a local development server
        if self.api_token.is_some() && is_http && !self.is_local() {
            return Err(ValidationError::ServiceUrlMustBeHttps);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ProfileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_service_defaults() {
        let config = ProfileServiceConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.api_token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = ProfileServiceConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidServiceUrl)
        ));
    }

    #[test]
    fn test_token_requires_https_for_remote_hosts() {
        let config = ProfileServiceConfig {
            base_url: "http://api.example.com".to_string(),
            api_token: Some(Secret::new("tok".to_string())),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::ServiceUrlMustBeHttps)
        ));

        let local = ProfileServiceConfig {
            api_token: Some(Secret::new("tok".to_string())),
            ..Default::default()
        };
        assert!(local.validate().is_ok());
    }

    #[test]
    fn test_timeout_bounds() {
        for timeout_secs in [0, 121] {
            let config = ProfileServiceConfig {
                timeout_secs,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
        }
    }
}
