//! WizardPhase - lifecycle of a registration wizard.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where the wizard is in its lifecycle.
///
/// `Collecting` covers all seven steps. `Submitting` is entered from the
/// last step and falls back to `Collecting` when the submission fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    #[default]
    Collecting,
    Submitting,
    Complete,
}

impl WizardPhase {
    /// Returns true if the draft may still be edited.
    pub fn is_editable(&self) -> bool {
        matches!(self, WizardPhase::Collecting)
    }
}

impl StateMachine for WizardPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardPhase::*;
        matches!(
            (self, target),
            (Collecting, Submitting) | (Submitting, Collecting) | (Submitting, Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardPhase::*;
        match self {
            Collecting => vec![Submitting],
            Submitting => vec![Collecting, Complete],
            Complete => vec![],
        }
    }
}
