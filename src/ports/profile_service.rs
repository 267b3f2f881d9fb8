//! ProfileService port - remote creation of a fitness profile.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::profile::{ActivityLevel, DietaryPreference, FitnessGoal, HealthGoal};

/// Payload sent to the profile service.
///
/// Measurements are metric; `bmi` is absent when it cannot be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub user_id: UserId,
    pub height: f64,
    pub weight: f64,
    pub bmi: Option<f64>,
    pub body_fat_percentage: f64,
    pub activity_level: ActivityLevel,
    pub dietary_preference: DietaryPreference,
    pub fitness_goal: FitnessGoal,
    pub goals: Vec<HealthGoal>,
    pub calorie_goal: u32,
}

/// Acknowledgement returned by the profile service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProfile {
    pub profile_id: ProfileId,
}

/// Errors reported by the profile service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Not authorized to create a profile")]
    Unauthorized,

    #[error("Profile rejected: {0}")]
    Rejected(String),

    #[error("Profile service error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// Port for the remote "create profile" API.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Creates the profile described by `request`.
    ///
    /// # Errors
    /// Returns `ProfileServiceError` on transport failure or rejection.
    async fn create_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<CreatedProfile, ProfileServiceError>;
}
