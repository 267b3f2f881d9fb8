//! Fixed option lists for the selection steps and the unit toggles.

profile_option! {
    /// How active the user is during a typical week.
    ActivityLevel, field = "activityLevel", noun = "activity level" {
        /// Little or no exercise
        Sedentary => "Sedentary",
        /// Light exercise 1-3 days a week
        LightlyActive => "Lightly Active",
        /// Moderate exercise 3-5 days a week
        ModeratelyActive => "Moderately Active",
        /// Hard exercise 6-7 days a week
        VeryActive => "Very Active",
        /// Physical job or training twice a day
        ExtremelyActive => "Extremely Active",
    }
}

impl ActivityLevel {
    /// TDEE multiplier applied to the basal metabolic rate.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }
}

profile_option! {
    /// Primary fitness goal; drives the calorie adjustment.
    FitnessGoal, field = "fitnessGoal", noun = "fitness goal" {
        WeightLoss => "Weight Loss",
        Maintain => "Maintain",
        MuscleGain => "Muscle Gain",
        ImproveEndurance => "Improve Endurance",
        IncreaseStrength => "Increase Strength",
        ImproveFlexibility => "Improve Flexibility",
    }
}

impl FitnessGoal {
    /// Flat kcal adjustment added on top of TDEE.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            FitnessGoal::WeightLoss => -500.0,
            FitnessGoal::MuscleGain => 300.0,
            _ => 0.0,
        }
    }
}

profile_option! {
    DietaryPreference, field = "dietaryPreference", noun = "dietary preference" {
        NoPreference => "No Preference",
        Vegetarian => "Vegetarian",
        Vegan => "Vegan",
        Pescatarian => "Pescatarian",
        Keto => "Keto",
        Paleo => "Paleo",
        Mediterranean => "Mediterranean",
        GlutenFree => "Gluten Free",
        DairyFree => "Dairy Free",
        LowCarb => "Low Carb",
    }
}

profile_option! {
    /// Secondary health goals; a user may pick up to three.
    HealthGoal, field = "goals", noun = "goal" {
        LoseWeight => "Lose weight",
        BuildMuscle => "Build muscle",
        StayActive => "Stay active",
        ImproveSleep => "Improve sleep",
        ReduceStress => "Reduce stress",
        EatHealthier => "Eat healthier",
        IncreaseEnergy => "Increase energy",
        ImproveFlexibility => "Improve flexibility",
    }
}

profile_option! {
    /// Selects the BMR coefficient set.
    Gender, field = "gender", noun = "gender" {
        Male => "Male",
        Female => "Female",
    }
}

profile_option! {
    HeightUnit, field = "heightUnit", noun = "height unit" {
        Centimeters => "cm",
        Inches => "in",
    }
}

impl HeightUnit {
    /// Converts a value in this unit to centimetres.
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Centimeters => value,
            HeightUnit::Inches => value * 2.54,
        }
    }
}

impl Default for HeightUnit {
    fn default() -> Self {
        HeightUnit::Centimeters
    }
}

profile_option! {
    WeightUnit, field = "weightUnit", noun = "weight unit" {
        Kilograms => "kg",
        Pounds => "lb",
    }
}

impl WeightUnit {
    /// Converts a value in this unit to kilograms.
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kilograms => value,
            WeightUnit::Pounds => value * 0.453_592_37,
        }
    }
}

impl Default for WeightUnit {
    fn default() -> Self {
        WeightUnit::Kilograms
    }
}
