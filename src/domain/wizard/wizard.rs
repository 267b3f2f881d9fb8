//! ProfileWizard aggregate - the registration state machine.
//!
//! Owns the draft, the current step, the lifecycle phase and the transient
//! validation errors. It performs no I/O; persistence and submission are
//! driven from the application layer.

use crate::domain::foundation::{DomainError, ErrorCode, StateMachine, ValidationError};
use crate::domain::profile::{FieldEdit, ProfileDraft};

use super::phase::WizardPhase;
use super::step::{StepView, WizardStep};
use super::validator::{validate_step, ValidationErrorSet};

/// Outcome of a `next` or `prev` request.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Moved forward to the given step.
    Advanced(WizardStep),
    /// Moved back to the given step.
    Retreated(WizardStep),
    /// Already at the first step; nothing happened.
    AtStart,
    /// The current step failed validation; the step is unchanged.
    Blocked(ValidationError),
    /// The last step validated; the wizard is now `Submitting`.
    ReadyToSubmit,
}

/// Registration wizard state.
#[derive(Debug, Clone)]
pub struct ProfileWizard {
    draft: ProfileDraft,
    step: WizardStep,
    phase: WizardPhase,
    errors: ValidationErrorSet,
}

impl ProfileWizard {
    /// Starts a fresh wizard at the first step.
    pub fn new() -> Self {
        Self::restore(ProfileDraft::new(), WizardStep::FIRST)
    }

    /// Resumes a wizard from previously saved state.
    pub fn restore(draft: ProfileDraft, step: WizardStep) -> Self {
        Self {
            draft,
            step,
            phase: WizardPhase::Collecting,
            errors: ValidationErrorSet::new(),
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn errors(&self) -> &ValidationErrorSet {
        &self.errors
    }

    pub fn is_complete(&self) -> bool {
        self.phase == WizardPhase::Complete
    }

    /// Renders the current step.
    pub fn view(&self) -> StepView {
        self.step.render(&self.draft)
    }

    /// Applies a field edit and clears pending errors.
    ///
    /// Returns whether the draft changed.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<bool, DomainError> {
        self.ensure_editable()?;
        self.errors.clear();
        Ok(self.draft.apply(edit))
    }

    /// Validates the current step and moves forward.
    pub fn next(&mut self) -> Result<Transition, DomainError> {
        self.ensure_editable()?;
        self.errors.clear();

        if let Err(err) = validate_step(self.step, &self.draft) {
            self.errors.insert(err.clone());
            return Ok(Transition::Blocked(err));
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(Transition::Advanced(next))
            }
            None => {
                self.phase = self.phase.transition_to(WizardPhase::Submitting)?;
                Ok(Transition::ReadyToSubmit)
            }
        }
    }

    /// Moves back one step without validating.
    pub fn prev(&mut self) -> Result<Transition, DomainError> {
        self.ensure_editable()?;
        self.errors.clear();

        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                Ok(Transition::Retreated(previous))
            }
            None => Ok(Transition::AtStart),
        }
    }

    /// Returns to `Collecting` at the last step after a failed submission.
    pub fn submission_failed(&mut self, errors: ValidationErrorSet) -> Result<(), DomainError> {
        self.phase = self.phase.transition_to(WizardPhase::Collecting)?;
        self.errors = errors;
        Ok(())
    }

    /// Marks the registration as complete.
    pub fn complete(&mut self) -> Result<(), DomainError> {
        self.phase = self.phase.transition_to(WizardPhase::Complete)?;
        self.errors.clear();
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), DomainError> {
        if self.phase.is_editable() {
            return Ok(());
        }
        match self.phase {
            WizardPhase::Submitting => Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "A submission is already in progress",
            )),
            _ => Err(DomainError::new(
                ErrorCode::WizardComplete,
                "Registration is already complete",
            )),
        }
    }
}

impl Default for ProfileWizard {
    fn default() -> Self {
        Self::new()
    }
}
