//! Profile module - the registration draft and what is derived from it.
//!
//! - `options` - closed option lists (activity, goals, diet, units)
//! - `draft` - the `ProfileDraft` aggregate and `FieldEdit`
//! - `metrics` - BMI, BMR, TDEE and calorie goal
//! - `recommendations` - post-registration summary

#[macro_use]
mod macros;

mod draft;
mod metrics;
mod options;
mod recommendations;

pub use draft::{FieldEdit, ProfileDraft, MAX_GOALS};
pub(crate) use draft::parse_decimal;
pub use metrics::{
    age_on, compute_bmi, compute_bmr, compute_calorie_goal, compute_tdee, draft_bmi,
    BmiCategory, BmrSubject, DEFAULT_AGE_YEARS, DEFAULT_CALORIE_GOAL,
};
pub use options::{
    ActivityLevel, DietaryPreference, FitnessGoal, Gender, HealthGoal, HeightUnit, WeightUnit,
};
pub use recommendations::{ProfileRecommendations, WATER_ML_PER_KG};
