use clap::{Parser, Subcommand};

/// DietPlanner — computes a calorie target, macros, and a meal plan from
/// body metrics.
#[derive(Parser, Debug)]
#[command(name = "diet_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a diet plan from your body metrics.
    Plan {
        /// Read metrics from a JSON file instead of prompting.
        #[arg(short, long)]
        metrics: Option<String>,

        /// Print the plan as JSON instead of formatted text.
        #[arg(long)]
        json: bool,

        /// Write the meal plan to a CSV file.
        #[arg(long)]
        export: Option<String>,
    },

    /// Compute a plan for a built-in sample profile.
    Example {
        /// Print the plan as JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },

    /// Browse the food catalog.
    Foods {
        /// Only show foods in this category.
        #[arg(short, long)]
        category: Option<String>,

        /// Fuzzy-search foods by name.
        #[arg(short, long)]
        search: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            metrics: None,
            json: false,
            export: None,
        }
    }
}
