//! RegistrationSession - one in-progress registration, wired to its ports.
//!
//! The wizard itself is pure; this type mirrors every change to storage,
//! resolves the user when the last step is confirmed and reports the
//! outcome through the notifier.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::profile::{BmrSubject, FieldEdit, ProfileRecommendations};
use crate::domain::wizard::{ProfileWizard, StepView, Transition};
use crate::ports::{Notification, Notifier, SessionProvider};

use super::{DraftPersistence, SubmissionError, SubmitProfileCommand, SubmitProfileHandler};

/// Message shown after a successful registration.
pub const PROFILE_CREATED_MESSAGE: &str = "Profile created successfully!";

/// What happened after `next`.
#[derive(Debug, Clone)]
pub enum RegistrationOutcome {
    /// An ordinary step transition (or a blocked one).
    Step(Transition),
    /// The profile was created; the wizard is complete.
    Completed(ProfileRecommendations),
    /// Submission failed; the wizard is back on the last step.
    SubmissionFailed(SubmissionError),
}

/// Drives a [`ProfileWizard`] against persistence, identity and submission.
pub struct RegistrationSession {
    wizard: ProfileWizard,
    persistence: DraftPersistence,
    submitter: SubmitProfileHandler,
    session_provider: Arc<dyn SessionProvider>,
    notifier: Arc<dyn Notifier>,
    subject: BmrSubject,
}

impl RegistrationSession {
    /// Restores saved progress and returns a ready session.
    pub async fn start(
        persistence: DraftPersistence,
        submitter: SubmitProfileHandler,
        session_provider: Arc<dyn SessionProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (draft, step) = persistence.restore().await;
        tracing::debug!(step = step.index(), "Registration session started");

        Self {
            wizard: ProfileWizard::restore(draft, step),
            persistence,
            submitter,
            session_provider,
            notifier,
            subject: BmrSubject::default(),
        }
    }

    /// Uses `subject` instead of the default for calorie estimates.
    pub fn with_subject(mut self, subject: BmrSubject) -> Self {
        self.subject = subject;
        self
    }

    pub fn wizard(&self) -> &ProfileWizard {
        &self.wizard
    }

    pub fn view(&self) -> StepView {
        self.wizard.view()
    }

    /// Applies an edit and mirrors the draft to storage when it changed.
    pub async fn edit(&mut self, edit: FieldEdit) -> Result<bool, DomainError> {
        let changed = self.wizard.apply(edit)?;
        if changed {
            self.persistence
                .save(self.wizard.draft(), self.wizard.step())
                .await;
        }
        Ok(changed)
    }

    /// Validates and advances; on the last step, submits the profile.
    pub async fn next(&mut self) -> Result<RegistrationOutcome, DomainError> {
        match self.wizard.next()? {
            Transition::ReadyToSubmit => self.submit().await,
            transition => {
                if let Transition::Advanced(step) = &transition {
                    self.persistence.save_step(*step).await;
                }
                Ok(RegistrationOutcome::Step(transition))
            }
        }
    }

    /// Goes back one step.
    pub async fn prev(&mut self) -> Result<Transition, DomainError> {
        let transition = self.wizard.prev()?;
        if let Transition::Retreated(step) = &transition {
            self.persistence.save_step(*step).await;
        }
        Ok(transition)
    }

    async fn submit(&mut self) -> Result<RegistrationOutcome, DomainError> {
        let cmd = SubmitProfileCommand {
            user_id: self.session_provider.current_user_id().await,
            draft: self.wizard.draft().clone(),
            subject: self.subject,
        };

        match self.submitter.handle(cmd).await {
            Ok(result) => {
                self.wizard.complete()?;
                self.notifier.notify(Notification::success(PROFILE_CREATED_MESSAGE));
                Ok(RegistrationOutcome::Completed(result.recommendations))
            }
            Err(err) => {
                self.wizard.submission_failed(err.field_errors())?;
                self.notifier.notify(Notification::error(err.to_string()));
                Ok(RegistrationOutcome::SubmissionFailed(err))
            }
        }
    }
}
