//! Wizard module - the step sequence, validation and state machine.

mod phase;
mod step;
mod validator;
#[allow(clippy::module_inception)]
mod wizard;

pub use phase::WizardPhase;
pub use step::{StepDescriptor, StepInput, StepView, WizardStep};
pub use validator::{
    validate_activity_level, validate_all, validate_body_fat, validate_dietary_preference,
    validate_fitness_goal, validate_goals, validate_height, validate_step, validate_weight,
    ValidationErrorSet, MAX_BODY_FAT_PERCENT, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_HEIGHT_CM,
    MIN_WEIGHT_KG,
};
pub use wizard::{ProfileWizard, Transition};
