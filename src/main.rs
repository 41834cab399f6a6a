use clap::Parser;
use std::fs;
use std::path::Path;

use diet_planner_rs::cli::{Cli, Command};
use diet_planner_rs::error::{DietError, Result};
use diet_planner_rs::interface::{
    collect_user_metrics, display_diet_plan, display_food_list, prompt_yes_no, write_plan_csv,
};
use diet_planner_rs::models::{ActivityLevel, FoodCategory, Sex, UserMetrics};
use diet_planner_rs::planner::{catalog, compute_diet_plan};

/// Default CSV path for the interactive export confirm.
const DEFAULT_EXPORT_PATH: &str = "diet_plan.csv";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            metrics,
            json,
            export,
        } => cmd_plan(metrics.as_deref(), json, export.as_deref()),
        Command::Example { json } => cmd_example(json),
        Command::Foods { category, search } => cmd_foods(category.as_deref(), search.as_deref()),
    }
}

/// Compute and render a diet plan from collected or file-supplied metrics.
fn cmd_plan(metrics_path: Option<&str>, json: bool, export: Option<&str>) -> Result<()> {
    let interactive = metrics_path.is_none();

    let metrics = match metrics_path {
        Some(path) => load_metrics(path)?,
        None => collect_user_metrics()?,
    };

    let plan = compute_diet_plan(&metrics);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_diet_plan(&plan);
    }

    if let Some(path) = export {
        write_plan_csv(&plan, Path::new(path))?;
        println!("Meal plan written to {}", path);
    } else if interactive && !json {
        let save = prompt_yes_no(
            &format!("Export the meal plan to {}?", DEFAULT_EXPORT_PATH),
            false,
        )?;
        if save {
            write_plan_csv(&plan, Path::new(DEFAULT_EXPORT_PATH))?;
            println!("Meal plan written to {}", DEFAULT_EXPORT_PATH);
        }
    }

    Ok(())
}

/// Compute a plan for the built-in sample profile.
fn cmd_example(json: bool) -> Result<()> {
    let metrics = UserMetrics {
        height_feet: 5,
        current_weight_kg: 70.0,
        target_weight_kg: 65.0,
        age_years: 30,
        sex: Sex::Male,
        activity_level: ActivityLevel::ModeratelyActive,
    };

    if !json {
        println!(
            "Sample profile: {}, {} ft, {} kg -> {} kg, age {}, {}",
            metrics.sex.label(),
            metrics.height_feet,
            metrics.current_weight_kg,
            metrics.target_weight_kg,
            metrics.age_years,
            metrics.activity_level.label()
        );
    }

    let plan = compute_diet_plan(&metrics);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_diet_plan(&plan);
    }

    Ok(())
}

/// Browse or search the food catalog.
fn cmd_foods(category: Option<&str>, search: Option<&str>) -> Result<()> {
    if let Some(query) = search {
        let results = catalog::search(query);
        if results.is_empty() {
            println!("No foods matching '{}'", query);
            return Ok(());
        }
        display_food_list(&results, &format!("Foods matching '{}'", query));
        return Ok(());
    }

    if let Some(label) = category {
        let category = FoodCategory::from_label(label).ok_or_else(|| {
            DietError::InvalidInput(format!(
                "Unknown category '{}' (expected one of: protein, carbs, fats, vegetables, fruits, dairy)",
                label
            ))
        })?;
        let foods = catalog::foods_in_category(category);
        display_food_list(&foods, &format!("{} foods", category.label()));
        return Ok(());
    }

    display_food_list(&catalog::all_foods(), "Food catalog");
    Ok(())
}

/// Read a UserMetrics value from a JSON file.
fn load_metrics(path: &str) -> Result<UserMetrics> {
    let content = fs::read_to_string(path)?;
    let metrics: UserMetrics = serde_json::from_str(&content)?;
    Ok(metrics)
}
