//! Derived health metrics: BMI, BMR, TDEE and the daily calorie goal.
//!
//! All functions are pure. BMR uses the revised Harris-Benedict equations
//! (Roza & Shizgal, 1984):
//!
//! - male:   `88.362 + 13.397 * kg + 4.799 * cm - 5.677 * age`
//! - female: `447.593 + 9.247 * kg + 3.098 * cm - 4.330 * age`

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::draft::ProfileDraft;
use super::options::{ActivityLevel, Gender};

/// Calorie goal used when height or weight is not available.
pub const DEFAULT_CALORIE_GOAL: u32 = 1500;

/// Age assumed when no birth date is known.
pub const DEFAULT_AGE_YEARS: u32 = 25;

/// Computes BMI rounded to one decimal.
///
/// Returns `None` when either input is non-positive or not finite.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !(height_cm.is_finite() && weight_kg.is_finite()) || height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(round_to_tenth(weight_kg / (height_m * height_m)))
}

/// BMI for a draft, `None` if height or weight is missing.
pub fn draft_bmi(draft: &ProfileDraft) -> Option<f64> {
    compute_bmi(draft.height_cm()?, draft.weight_kg()?)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// WHO adult BMI category. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Underweight => write!(f, "Underweight"),
            Self::Normal => write!(f, "Normal"),
            Self::Overweight => write!(f, "Overweight"),
            Self::Obese => write!(f, "Obese"),
        }
    }
}

/// Who the BMR is computed for.
///
/// The short registration flow collects neither gender nor birth date, so
/// it uses `BmrSubject::default()` (male, 25). Callers that know more pass
/// a real subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmrSubject {
    pub gender: Gender,
    pub age_years: u32,
}

impl BmrSubject {
    pub fn new(gender: Gender, age_years: u32) -> Self {
        Self { gender, age_years }
    }

    /// Builds a subject from a birth date, computing full years at `today`.
    pub fn from_birth_date(gender: Gender, birth_date: NaiveDate, today: NaiveDate) -> Self {
        Self::new(gender, age_on(birth_date, today))
    }
}

impl Default for BmrSubject {
    fn default() -> Self {
        Self::new(Gender::Male, DEFAULT_AGE_YEARS)
    }
}

/// Full years between `birth_date` and `today`; zero for future dates.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    if birth_date > today {
        return 0;
    }
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Basal metabolic rate in kcal/day.
pub fn compute_bmr(weight_kg: f64, height_cm: f64, subject: &BmrSubject) -> f64 {
    let age = f64::from(subject.age_years);
    match subject.gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Total daily energy expenditure. An unset activity level counts as sedentary.
pub fn compute_tdee(bmr: f64, activity: Option<ActivityLevel>) -> f64 {
    bmr * activity.map_or(ActivityLevel::Sedentary.multiplier(), |a| a.multiplier())
}

/// Daily calorie goal in kcal.
///
/// Returns [`DEFAULT_CALORIE_GOAL`] when height or weight is missing.
pub fn compute_calorie_goal(draft: &ProfileDraft, subject: &BmrSubject) -> u32 {
    let (Some(height), Some(weight)) = (draft.height_cm(), draft.weight_kg()) else {
        return DEFAULT_CALORIE_GOAL;
    };
    let tdee = compute_tdee(compute_bmr(weight, height, subject), draft.activity_level());
    let adjustment = draft.fitness_goal().map_or(0.0, |g| g.calorie_adjustment());
    (tdee + adjustment).round().max(0.0) as u32
}
