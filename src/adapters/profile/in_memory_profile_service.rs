//! In-memory profile service for tests and offline runs.
//!
//! Records every request it receives. A failure can be queued so the next
//! call returns it instead of creating a profile.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::ProfileId;
use crate::ports::{CreateProfileRequest, CreatedProfile, ProfileService, ProfileServiceError};

#[derive(Debug, Default)]
struct State {
    requests: Vec<CreateProfileRequest>,
    next_failure: Option<ProfileServiceError>,
    fail_always: Option<ProfileServiceError>,
}

/// Recording fake of [`ProfileService`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileService {
    state: Arc<Mutex<State>>,
}

impl InMemoryProfileService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with `error`.
    pub fn failing(error: ProfileServiceError) -> Self {
        let state = State {
            fail_always: Some(error),
            ..State::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// The next call fails with `error`; later calls succeed.
    pub async fn fail_next(&self, error: ProfileServiceError) {
        self.state.lock().await.next_failure = Some(error);
    }

    /// Requests received so far, including failed ones.
    pub async fn requests(&self) -> Vec<CreateProfileRequest> {
        self.state.lock().await.requests.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.state.lock().await.requests.len()
    }
}

#[async_trait]
impl ProfileService for InMemoryProfileService {
    async fn create_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<CreatedProfile, ProfileServiceError> {
        let mut state = self.state.lock().await;
        state.requests.push(request.clone());

        if let Some(err) = state.next_failure.take() {
            return Err(err);
        }
        if let Some(err) = &state.fail_always {
            return Err(err.clone());
        }

        Ok(CreatedProfile {
            profile_id: ProfileId::new(format!("profile-{}", state.requests.len())),
        })
    }
}
