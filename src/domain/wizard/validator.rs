//! Step validation rules.
//!
//! One pure predicate per step. Each returns the first problem found as a
//! `ValidationError` whose message is ready to show to the user.

use std::collections::BTreeMap;

use crate::domain::foundation::ValidationError;
use crate::domain::profile::{parse_decimal, ProfileDraft, MAX_GOALS};

use super::step::WizardStep;

pub const MIN_HEIGHT_CM: f64 = 0.1;
pub const MAX_HEIGHT_CM: f64 = 300.0;
pub const MIN_WEIGHT_KG: f64 = 0.1;
pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MAX_BODY_FAT_PERCENT: f64 = 100.0;

pub fn validate_height(draft: &ProfileDraft) -> Result<(), ValidationError> {
    let invalid = "Please enter a valid height between 0.1 and 300 cm";
    let value = required_decimal(draft.height(), "height", "Please enter your height", invalid)?;
    if value > MIN_HEIGHT_CM && value <= MAX_HEIGHT_CM {
        Ok(())
    } else {
        Err(ValidationError::out_of_range("height", invalid))
    }
}

pub fn validate_weight(draft: &ProfileDraft) -> Result<(), ValidationError> {
    let invalid = "Please enter a valid weight between 0.1 and 500 kg";
    let value = required_decimal(draft.weight(), "weight", "Please enter your weight", invalid)?;
    if value > MIN_WEIGHT_KG && value <= MAX_WEIGHT_KG {
        Ok(())
    } else {
        Err(ValidationError::out_of_range("weight", invalid))
    }
}

pub fn validate_activity_level(draft: &ProfileDraft) -> Result<(), ValidationError> {
    draft.activity_level().map(|_| ()).ok_or_else(|| {
        ValidationError::empty_field("activityLevel", "Please select your activity level")
    })
}

pub fn validate_fitness_goal(draft: &ProfileDraft) -> Result<(), ValidationError> {
    draft.fitness_goal().map(|_| ()).ok_or_else(|| {
        ValidationError::empty_field("fitnessGoal", "Please select your fitness goal")
    })
}

pub fn validate_goals(draft: &ProfileDraft) -> Result<(), ValidationError> {
    let goals = draft.goals();
    if goals.is_empty() {
        return Err(ValidationError::empty_field(
            "goals",
            "Please select at least one goal",
        ));
    }
    if goals.len() > MAX_GOALS {
        return Err(ValidationError::too_many(
            "goals",
            MAX_GOALS,
            format!("You can select up to {} goals", MAX_GOALS),
        ));
    }
    Ok(())
}

pub fn validate_dietary_preference(draft: &ProfileDraft) -> Result<(), ValidationError> {
    draft.dietary_preference().map(|_| ()).ok_or_else(|| {
        ValidationError::empty_field(
            "dietaryPreference",
            "Please select your dietary preference",
        )
    })
}

pub fn validate_body_fat(draft: &ProfileDraft) -> Result<(), ValidationError> {
    let invalid = "Please enter a valid body fat percentage between 0 and 100";
    let value = required_decimal(
        draft.body_fat_percentage(),
        "bodyFatPercentage",
        "Please enter your body fat percentage",
        invalid,
    )?;
    if (0.0..MAX_BODY_FAT_PERCENT).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range("bodyFatPercentage", invalid))
    }
}

fn required_decimal(
    raw: &str,
    field: &str,
    empty_message: &str,
    invalid_message: &str,
) -> Result<f64, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::empty_field(field, empty_message));
    }
    parse_decimal(raw).ok_or_else(|| ValidationError::invalid_format(field, invalid_message))
}

/// Errors keyed by field, in step order.
///
/// Recomputed on every transition attempt and discarded on the next edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorSet {
    errors: Vec<ValidationError>,
}

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error, replacing any earlier one for the same field.
    pub fn insert(&mut self, error: ValidationError) {
        self.errors.retain(|e| e.field() != error.field());
        self.errors.push(error);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error surfaced to the user.
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field() == field)
            .map(|e| e.message())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Field name to message map, for serialization to a front end.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|e| (e.field().to_string(), e.message().to_string()))
            .collect()
    }
}

/// Validates a single step of the draft.
pub fn validate_step(step: WizardStep, draft: &ProfileDraft) -> Result<(), ValidationError> {
    (step.descriptor().validate)(draft)
}

/// Validates every step, collecting all failures in step order.
pub fn validate_all(draft: &ProfileDraft) -> ValidationErrorSet {
    let mut set = ValidationErrorSet::new();
    for step in WizardStep::ORDER {
        if let Err(err) = validate_step(step, draft) {
            set.insert(err);
        }
    }
    set
}
