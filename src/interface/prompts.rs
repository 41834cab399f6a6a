use dialoguer::{Confirm, Input, Select};

use crate::error::{DietError, Result};
use crate::models::{ActivityLevel, Sex, UserMetrics};

/// Prompt for height in whole feet.
pub fn prompt_height_feet() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Height (whole feet)")
        .default("5".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| DietError::InvalidInput("Height must be a whole number".to_string()))
}

/// Prompt for a weight in kg. Must be positive.
pub fn prompt_weight_kg(label: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(label).interact_text()?;

    let weight: f64 = input
        .parse()
        .map_err(|_| DietError::InvalidInput("Weight must be a number".to_string()))?;

    if weight <= 0.0 {
        return Err(DietError::InvalidInput(
            "Weight must be greater than zero".to_string(),
        ));
    }

    Ok(weight)
}

/// Prompt for age in whole years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new().with_prompt("Age (years)").interact_text()?;

    input
        .parse()
        .map_err(|_| DietError::InvalidInput("Age must be a whole number".to_string()))
}

/// Prompt for biological sex.
pub fn prompt_sex() -> Result<Sex> {
    let options: Vec<&str> = Sex::ALL.iter().map(|s| s.label()).collect();

    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Sex::ALL[selection])
}

/// Prompt for activity tier.
pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.label()).collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(2) // moderately active
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect all body metrics for a plan calculation.
///
/// This is the input-validation boundary: anything that parses here is
/// accepted, and the calculator itself never rejects a metrics value.
pub fn collect_user_metrics() -> Result<UserMetrics> {
    let height_feet = prompt_height_feet()?;
    let current_weight_kg = prompt_weight_kg("Current weight (kg)")?;
    let target_weight_kg = prompt_weight_kg("Target weight (kg)")?;
    let age_years = prompt_age()?;
    let sex = prompt_sex()?;
    let activity_level = prompt_activity_level()?;

    Ok(UserMetrics {
        height_feet,
        current_weight_kg,
        target_weight_kg,
        age_years,
        sex,
        activity_level,
    })
}
