use std::fs;
use std::io::Write;

use tempfile::NamedTempFile;

use diet_planner_rs::interface::write_plan_csv;
use diet_planner_rs::models::{ActivityLevel, Sex, UserMetrics};
use diet_planner_rs::planner::compute_diet_plan;

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
fn test_plan_structure() {
    let plan = compute_diet_plan(&sample_metrics());

    assert_eq!(plan.recommendations.recommended_foods.len(), 6);
    assert_eq!(plan.recommendations.foods_to_avoid.len(), 3);
    assert_eq!(plan.recommendations.meal_frequency, 5);

    assert_eq!(plan.meal_plan.breakfast.len(), 2);
    for (slot, foods) in plan.meal_plan.slots() {
        assert!(!foods.is_empty(), "empty meal slot: {}", slot);
    }

    // Both snack slots share the same list.
    assert_eq!(plan.meal_plan.morning_snack, plan.meal_plan.evening_snack);
}

#[test]
fn test_meal_plan_ignores_computed_targets() {
    // The meal slots come from fixed tables; two very different profiles
    // get the same foods even though their calorie targets differ.
    let light = compute_diet_plan(&UserMetrics {
        current_weight_kg: 50.0,
        target_weight_kg: 50.0,
        ..sample_metrics()
    });
    let heavy = compute_diet_plan(&UserMetrics {
        current_weight_kg: 120.0,
        target_weight_kg: 90.0,
        sex: Sex::Female,
        activity_level: ActivityLevel::ExtraActive,
        ..sample_metrics()
    });

    assert_ne!(light.calories, heavy.calories);
    assert_eq!(light.meal_plan, heavy.meal_plan);
    assert_eq!(
        light.recommendations.recommended_foods,
        heavy.recommendations.recommended_foods
    );
}

#[test]
fn test_plan_json_roundtrip() {
    let plan = compute_diet_plan(&sample_metrics());

    let json = serde_json::to_string_pretty(&plan).unwrap();
    let reloaded: diet_planner_rs::DietPlan = serde_json::from_str(&json).unwrap();

    assert_eq!(plan, reloaded);
}

#[test]
fn test_metrics_file_matches_interactive_input() {
    let json = r#"{
        "height_feet": 5,
        "current_weight_kg": 70.0,
        "target_weight_kg": 65.0,
        "age_years": 30,
        "sex": "male",
        "activity_level": "moderately_active"
    }"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let content = fs::read_to_string(file.path()).unwrap();
    let metrics: UserMetrics = serde_json::from_str(&content).unwrap();

    assert_eq!(compute_diet_plan(&metrics), compute_diet_plan(&sample_metrics()));
}

#[test]
fn test_csv_export() {
    let plan = compute_diet_plan(&sample_metrics());

    let file = NamedTempFile::new().unwrap();
    write_plan_csv(&plan, file.path()).unwrap();

    let content = fs::read_to_string(file.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    // Header plus one row per food per slot (5 slots x 2 foods).
    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with("slot,food,calories"));
    assert!(lines[1].starts_with("Breakfast,Oatmeal with Berries,150"));
    assert!(lines.iter().any(|l| l.starts_with("Dinner,Salmon,208")));
}
