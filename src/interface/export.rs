use std::path::Path;

use crate::error::Result;
use crate::models::DietPlan;

/// Write the meal plan to a CSV file, one row per food per slot.
pub fn write_plan_csv(plan: &DietPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "slot",
        "food",
        "calories",
        "protein_g",
        "carbs_g",
        "fats_g",
        "serving",
    ])?;

    for (slot, foods) in plan.meal_plan.slots() {
        for food in foods {
            wtr.write_record([
                slot.to_string(),
                food.name.clone(),
                food.calories.to_string(),
                format!("{:.1}", food.protein),
                format!("{:.1}", food.carbs),
                format!("{:.1}", food.fats),
                food.serving_size.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
