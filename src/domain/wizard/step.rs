//! WizardStep - the seven registration steps and their dispatch table.
//!
//! Each step maps to a `StepDescriptor` pairing a pure validator with a pure
//! renderer. Front ends never switch on the step index themselves; they ask
//! the descriptor for a `StepView` and report `FieldEdit`s back.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;
use crate::domain::profile::{
    parse_decimal, ActivityLevel, DietaryPreference, FitnessGoal, HealthGoal, ProfileDraft,
    MAX_GOALS,
};

use super::validator;

/// The registration steps in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Height,
    Weight,
    ActivityLevel,
    FitnessGoal,
    HealthGoals,
    DietaryPreference,
    BodyFat,
}

impl WizardStep {
    pub const ORDER: [WizardStep; 7] = [
        WizardStep::Height,
        WizardStep::Weight,
        WizardStep::ActivityLevel,
        WizardStep::FitnessGoal,
        WizardStep::HealthGoals,
        WizardStep::DietaryPreference,
        WizardStep::BodyFat,
    ];

    pub const FIRST: WizardStep = WizardStep::Height;
    pub const LAST: WizardStep = WizardStep::BodyFat;

    /// 0-based position in [`WizardStep::ORDER`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::ORDER.get(index).copied()
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn descriptor(&self) -> &'static StepDescriptor {
        &STEPS[self.index()]
    }

    pub fn title(&self) -> &'static str {
        self.descriptor().title
    }

    /// Renders the step for the given draft.
    pub fn render(&self, draft: &ProfileDraft) -> StepView {
        (self.descriptor().render)(draft)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Validator and renderer bound to one step.
pub struct StepDescriptor {
    pub step: WizardStep,
    pub title: &'static str,
    pub field: &'static str,
    pub validate: fn(&ProfileDraft) -> Result<(), ValidationError>,
    pub render: fn(&ProfileDraft) -> StepView,
}

impl fmt::Debug for StepDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDescriptor")
            .field("step", &self.step)
            .field("title", &self.title)
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// What kind of input a step asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepInput {
    /// Free decimal entry. Values are stored in `stored_unit`; the user
    /// types in `entry_unit`.
    Decimal {
        stored_unit: &'static str,
        entry_unit: &'static str,
    },
    SingleChoice {
        options: Vec<&'static str>,
    },
    MultiChoice {
        options: Vec<&'static str>,
        max: usize,
    },
}

/// Presentation-neutral snapshot of a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub step: WizardStep,
    pub title: &'static str,
    pub input: StepInput,
    /// Current value(s) as labels or stored text.
    pub current: Vec<String>,
}

static STEPS: [StepDescriptor; 7] = [
    StepDescriptor {
        step: WizardStep::Height,
        title: "Height",
        field: "height",
        validate: validator::validate_height,
        render: render_height,
    },
    StepDescriptor {
        step: WizardStep::Weight,
        title: "Weight",
        field: "weight",
        validate: validator::validate_weight,
        render: render_weight,
    },
    StepDescriptor {
        step: WizardStep::ActivityLevel,
        title: "Activity Level",
        field: "activityLevel",
        validate: validator::validate_activity_level,
        render: render_activity_level,
    },
    StepDescriptor {
        step: WizardStep::FitnessGoal,
        title: "Fitness Goal",
        field: "fitnessGoal",
        validate: validator::validate_fitness_goal,
        render: render_fitness_goal,
    },
    StepDescriptor {
        step: WizardStep::HealthGoals,
        title: "Health Goals",
        field: "goals",
        validate: validator::validate_goals,
        render: render_health_goals,
    },
    StepDescriptor {
        step: WizardStep::DietaryPreference,
        title: "Dietary Preference",
        field: "dietaryPreference",
        validate: validator::validate_dietary_preference,
        render: render_dietary_preference,
    },
    StepDescriptor {
        step: WizardStep::BodyFat,
        title: "Body Fat",
        field: "bodyFatPercentage",
        validate: validator::validate_body_fat,
        render: render_body_fat,
    },
];

fn text_value(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        Vec::new()
    } else {
        vec![raw.to_string()]
    }
}

/// Shows a stored metric value with at most two decimals.
fn metric_value(raw: &str) -> Vec<String> {
    match parse_decimal(raw) {
        Some(value) => {
            let text = format!("{:.2}", value);
            vec![text.trim_end_matches('0').trim_end_matches('.').to_string()]
        }
        None => text_value(raw),
    }
}

fn labels<T: Copy>(all: &[T], label: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(label).collect()
}

fn render_height(draft: &ProfileDraft) -> StepView {
    StepView {
        step: WizardStep::Height,
        title: "Height",
        input: StepInput::Decimal {
            stored_unit: "cm",
            entry_unit: draft.height_unit().label(),
        },
        current: metric_value(draft.height()),
    }
}

fn render_weight(draft: &ProfileDraft) -> StepView {
    StepView {
        step: WizardStep::Weight,
        title: "Weight",
        input: StepInput::Decimal {
            stored_unit: "kg",
            entry_unit: draft.weight_unit().label(),
        },
        current: metric_value(draft.weight()),
    }
}

fn render_activity_level(draft: &ProfileDraft) -> StepView {
    StepView {
        step: WizardStep::ActivityLevel,
        title: "Activity Level",
        input: StepInput::SingleChoice {
            options: labels(ActivityLevel::ALL, ActivityLevel::label),
        },
        current: draft.activity_level().map(|a| a.to_string()).into_iter().collect(),
    }
}

fn render_fitness_goal(draft: &ProfileDraft) -> StepView {
    StepView {
        step: WizardStep::FitnessGoal,
        title: "Fitness Goal",
        input: StepInput::SingleChoice {
            options: labels(FitnessGoal::ALL, FitnessGoal::label),
        },
        current: draft.fitness_goal().map(|g| g.to_string()).into_iter().collect(),
    }
}

fn render_health_goals(draft: &ProfileDraft) -> StepView {
    StepView {
        step: WizardStep::HealthGoals,
        title: "Health Goals",
        input: StepInput::MultiChoice {
            options: labels(HealthGoal::ALL, HealthGoal::label),
            max: MAX_GOALS,
        },
        current: draft.goals().iter().map(|g| g.to_string()).collect(),
    }
}

fn render_dietary_preference(draft: &ProfileDraft) -> StepView {
    StepView {
        step: WizardStep::DietaryPreference,
        title: "Dietary Preference",
        input: StepInput::SingleChoice {
            options: labels(DietaryPreference::ALL, DietaryPreference::label),
        },
        current: draft
            .dietary_preference()
            .map(|d| d.to_string())
            .into_iter()
            .collect(),
    }
}

fn render_body_fat(draft: &ProfileDraft) -> StepView {
    StepView {
        step: WizardStep::BodyFat,
        title: "Body Fat",
        input: StepInput::Decimal {
            stored_unit: "%",
            entry_unit: "%",
        },
        current: text_value(draft.body_fat_percentage()),
    }
}
