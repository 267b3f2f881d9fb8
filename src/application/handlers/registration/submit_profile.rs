//! SubmitProfileHandler - turns a finished draft into a remote profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, UserId, ValidationError};
use crate::domain::profile::{
    compute_calorie_goal, draft_bmi, BmrSubject, ProfileDraft, ProfileRecommendations,
};
use crate::domain::wizard::{validate_all, ValidationErrorSet};
use crate::ports::{CreateProfileRequest, ProfileService, ProfileServiceError};

use super::DraftPersistence;

/// Command to submit a completed registration.
#[derive(Debug, Clone)]
pub struct SubmitProfileCommand {
    /// The signed-in user, resolved by the caller at submission time.
    pub user_id: Option<UserId>,
    pub draft: ProfileDraft,
    pub subject: BmrSubject,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitProfileResult {
    pub profile_id: ProfileId,
    pub request: CreateProfileRequest,
    pub recommendations: ProfileRecommendations,
}

/// Why a submission did not produce a profile.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionError {
    #[error("User ID is unavailable. Please log in again.")]
    MissingUserId,

    #[error("{}", first_message(.0))]
    Invalid(ValidationErrorSet),

    #[error("Your session has expired. Please log in again.")]
    Unauthorized,

    #[error("Failed to create profile: {0}")]
    Service(ProfileServiceError),
}

fn first_message(errors: &ValidationErrorSet) -> &str {
    errors
        .first()
        .map(|e| e.message())
        .unwrap_or("Please complete every step")
}

impl SubmissionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmissionError::MissingUserId => ErrorCode::MissingUserId,
            SubmissionError::Invalid(_) => ErrorCode::ValidationFailed,
            SubmissionError::Unauthorized => ErrorCode::Unauthorized,
            SubmissionError::Service(_) => ErrorCode::ProfileServiceError,
        }
    }

    /// Field errors to show on the wizard, if any.
    pub fn field_errors(&self) -> ValidationErrorSet {
        match self {
            SubmissionError::Invalid(errors) => errors.clone(),
            _ => ValidationErrorSet::new(),
        }
    }
}

impl From<ProfileServiceError> for SubmissionError {
    fn from(err: ProfileServiceError) -> Self {
        match err {
            ProfileServiceError::Unauthorized => SubmissionError::Unauthorized,
            other => SubmissionError::Service(other),
        }
    }
}

impl From<SubmissionError> for DomainError {
    fn from(err: SubmissionError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Handler for profile submission.
pub struct SubmitProfileHandler {
    profile_service: Arc<dyn ProfileService>,
    persistence: DraftPersistence,
}

impl SubmitProfileHandler {
    pub fn new(profile_service: Arc<dyn ProfileService>, persistence: DraftPersistence) -> Self {
        Self {
            profile_service,
            persistence,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitProfileCommand,
    ) -> Result<SubmitProfileResult, SubmissionError> {
        // 1. Identity is checked before anything touches the network
        let user_id = cmd.user_id.ok_or(SubmissionError::MissingUserId)?;

        // 2. Re-validate every step
        let errors = validate_all(&cmd.draft);
        if !errors.is_empty() {
            return Err(SubmissionError::Invalid(errors));
        }

        // 3. Build the request with derived metrics
        let request = build_request(user_id, &cmd.draft, &cmd.subject)?;

        // 4. Create the profile
        tracing::info!(user_id = %request.user_id, calorie_goal = request.calorie_goal, "Submitting profile");
        let created = self
            .profile_service
            .create_profile(&request)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Profile creation failed");
                SubmissionError::from(e)
            })?;

        // 5. Saved progress is no longer needed
        self.persistence.clear().await;
        tracing::info!(profile_id = %created.profile_id, "Profile created");

        Ok(SubmitProfileResult {
            profile_id: created.profile_id,
            recommendations: ProfileRecommendations::derive(&cmd.draft, &cmd.subject),
            request,
        })
    }
}

/// Assembles the payload from a draft that has passed `validate_all`.
fn build_request(
    user_id: UserId,
    draft: &ProfileDraft,
    subject: &BmrSubject,
) -> Result<CreateProfileRequest, SubmissionError> {
    fn missing(field: &str) -> SubmissionError {
        let mut errors = ValidationErrorSet::new();
        errors.insert(ValidationError::empty_field(field, format!("Missing {}", field)));
        SubmissionError::Invalid(errors)
    }

    Ok(CreateProfileRequest {
        user_id,
        height: draft.height_cm().ok_or_else(|| missing("height"))?,
        weight: draft.weight_kg().ok_or_else(|| missing("weight"))?,
        bmi: draft_bmi(draft),
        body_fat_percentage: draft.body_fat().ok_or_else(|| missing("bodyFatPercentage"))?,
        activity_level: draft.activity_level().ok_or_else(|| missing("activityLevel"))?,
        dietary_preference: draft
            .dietary_preference()
            .ok_or_else(|| missing("dietaryPreference"))?,
        fitness_goal: draft.fitness_goal().ok_or_else(|| missing("fitnessGoal"))?,
        goals: draft.goals().to_vec(),
        calorie_goal: compute_calorie_goal(draft, subject),
    })
}
