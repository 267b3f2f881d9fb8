//! Wizard front-end configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_COMPLETION_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// How long the "creating your profile" screen stays up
    #[serde(default = "default_completion_delay")]
    pub completion_delay_ms: u64,
}

impl WizardConfig {
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.completion_delay_ms > MAX_COMPLETION_DELAY_MS {
            return Err(ValidationError::CompletionDelayTooLong);
        }
        Ok(())
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            completion_delay_ms: default_completion_delay(),
        }
    }
}

fn default_completion_delay() -> u64 {
    3000
}
