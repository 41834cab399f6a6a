use crate::models::{DietPlan, FoodItem, Macronutrients};

/// Display a computed diet plan in formatted sections.
pub fn display_diet_plan(plan: &DietPlan) {
    println!();
    println!("=== Your Diet Plan ===");
    println!();
    println!("Daily calorie target: {} kcal", plan.calories);

    display_macros(&plan.macronutrients);

    println!();
    println!(
        "--- Meal Plan ({} meals/day) ---",
        plan.recommendations.meal_frequency
    );
    for (slot, foods) in plan.meal_plan.slots() {
        println!();
        println!("{}:", slot);
        for food in foods {
            println!(
                "  {} - {} cal ({})",
                food.name, food.calories, food.serving_size
            );
        }
    }

    println!();
    println!("--- Recommendations ---");
    println!();
    println!("Eat more of:");
    for food in &plan.recommendations.recommended_foods {
        println!(
            "  {} ({}, {} cal per {})",
            food.name,
            food.category.label(),
            food.calories,
            food.serving_size
        );
    }
    println!();
    println!("Avoid:");
    for food in &plan.recommendations.foods_to_avoid {
        println!("  {}", food.name);
    }

    println!();
    println!(
        "Daily water intake: {:.1} L",
        plan.recommendations.daily_water_liters
    );
    println!();
}

/// Display macro gram targets with their share of total grams.
fn display_macros(macros: &Macronutrients) {
    println!();
    println!("--- Macronutrients ---");

    let total = macros.total_grams();
    let rows = [
        ("Protein", macros.protein_g),
        ("Carbs", macros.carbs_g),
        ("Fat", macros.fats_g),
    ];

    for (name, grams) in rows {
        if total > 0.0 {
            println!(
                "  {:<8} {:>7.1} g  ({:.0}%)",
                name,
                grams,
                grams / total * 100.0
            );
        } else {
            println!("  {:<8} {:>7.1} g", name, grams);
        }
    }
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} - {} cal, P:{} C:{} F:{}, {} [{}]",
            food.name,
            food.calories,
            food.protein,
            food.carbs,
            food.fats,
            food.serving_size,
            food.category.label()
        );
    }

    println!();
}
