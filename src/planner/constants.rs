use crate::models::{ActivityLevel, WeightGoal};

/// Centimetres per foot of height.
pub const CM_PER_FOOT: f64 = 30.48;

// ─────────────────────────────────────────────────────────────────────────────
// Harris-Benedict BMR coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_MALE_BASE: f64 = 88.362;
pub const BMR_MALE_PER_KG: f64 = 13.397;
pub const BMR_MALE_PER_CM: f64 = 4.799;
pub const BMR_MALE_PER_YEAR: f64 = 5.677;

pub const BMR_FEMALE_BASE: f64 = 447.593;
pub const BMR_FEMALE_PER_KG: f64 = 9.247;
pub const BMR_FEMALE_PER_CM: f64 = 3.098;
pub const BMR_FEMALE_PER_YEAR: f64 = 4.330;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie and macro factors
// ─────────────────────────────────────────────────────────────────────────────

/// Maintenance scaling when the goal is to lose weight.
pub const WEIGHT_LOSS_FACTOR: f64 = 0.85;

/// Maintenance scaling when the goal is to gain weight.
pub const WEIGHT_GAIN_FACTOR: f64 = 1.10;

/// Protein grams per kg of body weight on a loss goal.
pub const PROTEIN_G_PER_KG_LOSS: f64 = 2.0;

/// Protein grams per kg of body weight otherwise.
pub const PROTEIN_G_PER_KG_GAIN: f64 = 2.2;

/// Share of daily calories allocated to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.25;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily water intake in liters per kg of body weight.
pub const WATER_L_PER_KG: f64 = 0.033;

/// Meals per day in every plan.
pub const MEAL_FREQUENCY: u32 = 5;

/// Total-energy-expenditure multiplier for an activity tier.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.20,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.90,
    }
}

/// Protein grams per kg for a goal direction.
pub fn protein_g_per_kg(goal: WeightGoal) -> f64 {
    match goal {
        WeightGoal::Lose => PROTEIN_G_PER_KG_LOSS,
        WeightGoal::Gain | WeightGoal::Maintain => PROTEIN_G_PER_KG_GAIN,
    }
}

/// Calorie scaling factor for a goal direction.
pub fn goal_calorie_factor(goal: WeightGoal) -> f64 {
    match goal {
        WeightGoal::Lose => WEIGHT_LOSS_FACTOR,
        WeightGoal::Gain => WEIGHT_GAIN_FACTOR,
        WeightGoal::Maintain => 1.0,
    }
}
