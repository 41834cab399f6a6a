use serde::{Deserialize, Serialize};

use crate::models::FoodItem;
use crate::planner::constants::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Daily macronutrient targets in grams.
///
/// Carb grams are derived from the calorie remainder after protein and fat,
/// so they can go negative for extreme inputs. That is accepted behavior,
/// not clamped here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macronutrients {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

impl Macronutrients {
    /// Total grams across all three macros.
    pub fn total_grams(&self) -> f64 {
        self.protein_g + self.carbs_g + self.fats_g
    }

    /// Calories implied by the gram amounts (4/4/9 kcal per gram).
    pub fn calories(&self) -> f64 {
        self.protein_g * KCAL_PER_G_PROTEIN
            + self.carbs_g * KCAL_PER_G_CARBS
            + self.fats_g * KCAL_PER_G_FAT
    }
}

/// Food guidance attached to a plan: what to eat, what to skip, how much
/// water, and how many meals per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietRecommendations {
    pub recommended_foods: Vec<FoodItem>,
    pub foods_to_avoid: Vec<FoodItem>,
    pub daily_water_liters: f64,
    pub meal_frequency: u32,
}

/// Five named meal slots, each an ordered list of foods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: Vec<FoodItem>,
    pub morning_snack: Vec<FoodItem>,
    pub lunch: Vec<FoodItem>,
    pub evening_snack: Vec<FoodItem>,
    pub dinner: Vec<FoodItem>,
}

impl MealPlan {
    /// Slots in day order with their display names.
    pub fn slots(&self) -> [(&'static str, &[FoodItem]); 5] {
        [
            ("Breakfast", &self.breakfast),
            ("Morning snack", &self.morning_snack),
            ("Lunch", &self.lunch),
            ("Evening snack", &self.evening_snack),
            ("Dinner", &self.dinner),
        ]
    }
}

/// Complete computed diet plan. Built once per calculation, never mutated,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub calories: i32,
    pub macronutrients: Macronutrients,
    pub recommendations: DietRecommendations,
    pub meal_plan: MealPlan,
}
