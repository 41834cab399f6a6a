use crate::models::{
    DietPlan, DietRecommendations, Macronutrients, MealPlan, Sex, UserMetrics, WeightGoal,
};
use crate::planner::catalog;
use crate::planner::constants::*;

/// Basal metabolic rate in kcal/day via Harris-Benedict, truncated toward
/// zero.
pub fn basal_metabolic_rate(metrics: &UserMetrics) -> i32 {
    let weight = metrics.current_weight_kg;
    let height = metrics.height_cm();
    let age = metrics.age_years as f64;

    let bmr = match metrics.sex {
        Sex::Male => {
            BMR_MALE_BASE + BMR_MALE_PER_KG * weight + BMR_MALE_PER_CM * height
                - BMR_MALE_PER_YEAR * age
        }
        Sex::Female => {
            BMR_FEMALE_BASE + BMR_FEMALE_PER_KG * weight + BMR_FEMALE_PER_CM * height
                - BMR_FEMALE_PER_YEAR * age
        }
    };

    bmr as i32
}

/// Maintenance calories: BMR scaled by the activity multiplier, truncated.
pub fn maintenance_calories(bmr: i32, metrics: &UserMetrics) -> i32 {
    (bmr as f64 * activity_multiplier(metrics.activity_level)) as i32
}

/// Final daily calorie target: maintenance scaled toward the weight goal,
/// truncated. Maintenance passes through unchanged when weights are equal.
pub fn daily_calorie_target(maintenance: i32, metrics: &UserMetrics) -> i32 {
    match metrics.goal() {
        WeightGoal::Maintain => maintenance,
        goal => (maintenance as f64 * goal_calorie_factor(goal)) as i32,
    }
}

/// Split a calorie target into protein/carb/fat gram targets.
///
/// Protein is fixed per kg of body weight, fat takes a fixed share of
/// calories, and carbs absorb the remainder. The remainder is not clamped:
/// extreme inputs produce negative carb grams and callers treat the output
/// as advisory.
pub fn macronutrient_split(calories: i32, metrics: &UserMetrics) -> Macronutrients {
    let protein_g = metrics.current_weight_kg * protein_g_per_kg(metrics.goal());
    let fats_g = calories as f64 * FAT_CALORIE_SHARE / KCAL_PER_G_FAT;

    let remaining_calories =
        calories as f64 - protein_g * KCAL_PER_G_PROTEIN - fats_g * KCAL_PER_G_FAT;
    let carbs_g = remaining_calories / KCAL_PER_G_CARBS;

    Macronutrients {
        protein_g,
        carbs_g,
        fats_g,
    }
}

/// Daily water intake target in liters.
pub fn daily_water_intake(weight_kg: f64) -> f64 {
    weight_kg * WATER_L_PER_KG
}

/// Food guidance for the plan. The lists come from the fixed catalogs and do
/// not depend on any computed value.
pub fn build_recommendations(metrics: &UserMetrics) -> DietRecommendations {
    DietRecommendations {
        recommended_foods: catalog::recommended_foods().to_vec(),
        foods_to_avoid: catalog::foods_to_avoid().to_vec(),
        daily_water_liters: daily_water_intake(metrics.current_weight_kg),
        meal_frequency: MEAL_FREQUENCY,
    }
}

/// Assemble the five meal slots from the fixed catalogs. The snack list is
/// shared by both snack slots. Slot contents are independent of the computed
/// calorie and macro targets and do not sum to them.
pub fn build_meal_plan() -> MealPlan {
    MealPlan {
        breakfast: catalog::breakfast_foods().to_vec(),
        morning_snack: catalog::snack_foods().to_vec(),
        lunch: catalog::lunch_foods().to_vec(),
        evening_snack: catalog::snack_foods().to_vec(),
        dinner: catalog::dinner_foods().to_vec(),
    }
}

/// Compute a complete diet plan from body metrics.
///
/// Total over any finite input: never fails, never validates, has no side
/// effects, and returns identical output for identical input.
pub fn compute_diet_plan(metrics: &UserMetrics) -> DietPlan {
    let bmr = basal_metabolic_rate(metrics);
    let maintenance = maintenance_calories(bmr, metrics);
    let calories = daily_calorie_target(maintenance, metrics);
    let macronutrients = macronutrient_split(calories, metrics);

    DietPlan {
        calories,
        macronutrients,
        recommendations: build_recommendations(metrics),
        meal_plan: build_meal_plan(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    fn sample_metrics() -> UserMetrics {
        UserMetrics {
            height_feet: 5,
            current_weight_kg: 70.0,
            target_weight_kg: 65.0,
            age_years: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::ModeratelyActive,
        }
    }

    #[test]
    fn test_bmr_male() {
        // 88.362 + 13.397*70 + 4.799*152.4 - 5.677*30, truncated
        assert_eq!(basal_metabolic_rate(&sample_metrics()), 1587);
    }

    #[test]
    fn test_bmr_female() {
        let metrics = UserMetrics {
            sex: Sex::Female,
            current_weight_kg: 50.0,
            target_weight_kg: 55.0,
            age_years: 25,
            activity_level: ActivityLevel::Sedentary,
            ..sample_metrics()
        };
        // 447.593 + 9.247*50 + 3.098*152.4 - 4.330*25, truncated
        assert_eq!(basal_metabolic_rate(&metrics), 1273);
    }

    #[test]
    fn test_maintenance_truncates() {
        let metrics = sample_metrics();
        // 1587 * 1.55 = 2459.85
        assert_eq!(maintenance_calories(1587, &metrics), 2459);
    }

    #[test]
    fn test_goal_adjustment_branches() {
        let losing = sample_metrics();
        assert_eq!(daily_calorie_target(2459, &losing), 2090);

        let gaining = UserMetrics {
            target_weight_kg: 75.0,
            ..sample_metrics()
        };
        // 2459 * 1.1 = 2704.9
        assert_eq!(daily_calorie_target(2459, &gaining), 2704);

        let maintaining = UserMetrics {
            target_weight_kg: 70.0,
            ..sample_metrics()
        };
        assert_eq!(daily_calorie_target(2459, &maintaining), 2459);
    }

    #[test]
    fn test_macro_split_losing() {
        let metrics = sample_metrics();
        let macros = macronutrient_split(2090, &metrics);

        assert!((macros.protein_g - 140.0).abs() < 1e-9);
        assert!((macros.fats_g - 2090.0 * 0.25 / 9.0).abs() < 1e-9);
        // Remainder: (2090 - 140*4 - 522.5) / 4
        assert!((macros.carbs_g - 251.875).abs() < 1e-9);
    }

    #[test]
    fn test_protein_multiplier_when_not_losing() {
        let metrics = UserMetrics {
            target_weight_kg: 70.0,
            ..sample_metrics()
        };
        let macros = macronutrient_split(2459, &metrics);
        assert!((macros.protein_g - 70.0 * 2.2).abs() < 1e-9);
    }

    #[test]
    fn test_negative_carbs_not_clamped() {
        // A tiny calorie target with a heavy user leaves the carb remainder
        // negative; that is the documented behavior.
        let metrics = UserMetrics {
            current_weight_kg: 200.0,
            target_weight_kg: 100.0,
            ..sample_metrics()
        };
        let macros = macronutrient_split(500, &metrics);
        assert!(macros.carbs_g < 0.0);
    }

    #[test]
    fn test_water_intake() {
        assert!((daily_water_intake(70.0) - 2.31).abs() < 1e-9);
    }
}
