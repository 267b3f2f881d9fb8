//! Recommendations shown once a profile has been created.

use serde::{Deserialize, Serialize};

use super::draft::ProfileDraft;
use super::metrics::{compute_calorie_goal, draft_bmi, BmiCategory, BmrSubject};

/// Daily water intake per kilogram of body weight, in millilitres.
pub const WATER_ML_PER_KG: f64 = 35.0;

/// Summary derived from a submitted draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecommendations {
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub calorie_goal: u32,
    pub daily_water_ml: Option<u32>,
    pub headline: String,
}

impl ProfileRecommendations {
    pub fn derive(draft: &ProfileDraft, subject: &BmrSubject) -> Self {
        let bmi = draft_bmi(draft);
        let bmi_category = bmi.map(BmiCategory::from_bmi);
        let daily_water_ml = draft
            .weight_kg()
            .filter(|w| *w > 0.0)
            .map(|w| (w * WATER_ML_PER_KG).round() as u32);

        Self {
            bmi,
            bmi_category,
            calorie_goal: compute_calorie_goal(draft, subject),
            daily_water_ml,
            headline: headline_for(bmi_category).to_string(),
        }
    }
}

fn headline_for(category: Option<BmiCategory>) -> &'static str {
    match category {
        Some(BmiCategory::Underweight) => {
            "Focus on nutrient-dense meals and strength training to build healthy mass."
        }
        Some(BmiCategory::Normal) => "You're in a healthy range. Keep up your balanced routine!",
        Some(BmiCategory::Overweight) => {
            "A modest calorie deficit and regular cardio will move you toward a healthy range."
        }
        Some(BmiCategory::Obese) => {
            "Start with low-impact activity and consider guidance from a health professional."
        }
        None => "Complete your measurements to unlock personalised recommendations.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::FieldEdit;

    #[test]
    fn derives_metrics_from_draft() {
        let mut draft = ProfileDraft::new();
        draft.apply(FieldEdit::Height("170".into()));
        draft.apply(FieldEdit::Weight("70".into()));

        let recs = ProfileRecommendations::derive(&draft, &BmrSubject::default());
        assert_eq!(recs.bmi, Some(24.2));
        assert_eq!(recs.bmi_category, Some(BmiCategory::Normal));
        assert_eq!(recs.daily_water_ml, Some(2450));
        assert!(recs.headline.contains("healthy range"));
    }

    #[test]
    fn missing_measurements_fall_back_to_defaults() {
        let recs = ProfileRecommendations::derive(&ProfileDraft::new(), &BmrSubject::default());
        assert_eq!(recs.bmi, None);
        assert_eq!(recs.calorie_goal, 1500);
        assert_eq!(recs.daily_water_ml, None);
        assert!(recs.headline.contains("Complete your measurements"));
    }
}
