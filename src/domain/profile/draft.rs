//! ProfileDraft - the in-progress aggregate collected by the wizard.
//!
//! Numeric fields keep the text the user typed (so a half-typed or garbage
//! value can be reported by the validator) but are always normalised to
//! metric units on entry. Converted values are stored unrounded so range
//! checks see the exact metric value. The unit toggles are display hints only.

use serde::{Deserialize, Serialize};

use super::options::{
    ActivityLevel, DietaryPreference, FitnessGoal, HealthGoal, HeightUnit, WeightUnit,
};

/// Maximum number of health goals a user may select.
pub const MAX_GOALS: usize = 3;

/// A single user edit reported by a step's front end.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    /// Height typed in the currently selected height unit.
    Height(String),
    /// Weight typed in the currently selected weight unit.
    Weight(String),
    HeightUnit(HeightUnit),
    WeightUnit(WeightUnit),
    BodyFatPercentage(String),
    ActivityLevel(ActivityLevel),
    FitnessGoal(FitnessGoal),
    DietaryPreference(DietaryPreference),
    /// Adds the goal if absent, removes it if present.
    ToggleGoal(HealthGoal),
}

/// Strongly-typed registration draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    height: String,
    weight: String,
    body_fat_percentage: String,
    activity_level: Option<ActivityLevel>,
    fitness_goal: Option<FitnessGoal>,
    dietary_preference: Option<DietaryPreference>,
    goals: Vec<HealthGoal>,
    height_unit: HeightUnit,
    weight_unit: WeightUnit,
}

impl ProfileDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an edit. Returns `true` if the draft changed.
    ///
    /// Toggling a fourth goal is a no-op and returns `false`.
    pub fn apply(&mut self, edit: FieldEdit) -> bool {
        let before = self.clone();
        let (height_unit, weight_unit) = (self.height_unit, self.weight_unit);
        match edit {
            FieldEdit::Height(raw) => self.height = normalize(&raw, |v| height_unit.to_cm(v)),
            FieldEdit::Weight(raw) => self.weight = normalize(&raw, |v| weight_unit.to_kg(v)),
            FieldEdit::HeightUnit(unit) => self.height_unit = unit,
            FieldEdit::WeightUnit(unit) => self.weight_unit = unit,
            FieldEdit::BodyFatPercentage(raw) => self.body_fat_percentage = raw.trim().to_string(),
            FieldEdit::ActivityLevel(level) => self.activity_level = Some(level),
            FieldEdit::FitnessGoal(goal) => self.fitness_goal = Some(goal),
            FieldEdit::DietaryPreference(pref) => self.dietary_preference = Some(pref),
            FieldEdit::ToggleGoal(goal) => self.toggle_goal(goal),
        }
        *self != before
    }

    fn toggle_goal(&mut self, goal: HealthGoal) {
        if let Some(pos) = self.goals.iter().position(|g| *g == goal) {
            self.goals.remove(pos);
        } else if self.goals.len() < MAX_GOALS {
            self.goals.push(goal);
        }
    }

    /// Height text, in centimetres.
    pub fn height(&self) -> &str {
        &self.height
    }

    /// Weight text, in kilograms.
    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn body_fat_percentage(&self) -> &str {
        &self.body_fat_percentage
    }

    pub fn activity_level(&self) -> Option<ActivityLevel> {
        self.activity_level
    }

    pub fn fitness_goal(&self) -> Option<FitnessGoal> {
        self.fitness_goal
    }

    pub fn dietary_preference(&self) -> Option<DietaryPreference> {
        self.dietary_preference
    }

    /// Selected health goals in selection order.
    pub fn goals(&self) -> &[HealthGoal] {
        &self.goals
    }

    pub fn height_unit(&self) -> HeightUnit {
        self.height_unit
    }

    pub fn weight_unit(&self) -> WeightUnit {
        self.weight_unit
    }

    /// Parsed height in centimetres, if the text is a number.
    pub fn height_cm(&self) -> Option<f64> {
        parse_decimal(&self.height)
    }

    /// Parsed weight in kilograms, if the text is a number.
    pub fn weight_kg(&self) -> Option<f64> {
        parse_decimal(&self.weight)
    }

    pub fn body_fat(&self) -> Option<f64> {
        parse_decimal(&self.body_fat_percentage)
    }

    /// Checks invariants that deserialization alone cannot enforce.
    ///
    /// Used when restoring persisted drafts: a draft with too many or
    /// duplicated goals was not produced by this code and is discarded.
    pub fn is_consistent(&self) -> bool {
        if self.goals.len() > MAX_GOALS {
            return false;
        }
        self.goals
            .iter()
            .enumerate()
            .all(|(i, goal)| !self.goals[..i].contains(goal))
    }
}

/// Parses user-entered decimal text. Empty, non-numeric and non-finite
/// values yield `None`.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Converts numeric input to metric; leaves unparseable text untouched so
/// the validator can report it.
fn normalize(raw: &str, to_metric: impl Fn(f64) -> f64) -> String {
    let trimmed = raw.trim();
    match parse_decimal(trimmed) {
        Some(value) => {
            let metric = to_metric(value);
            if metric == value {
                trimmed.to_string()
            } else {
                metric.to_string()
            }
        }
        None => trimmed.to_string(),
    }
}
