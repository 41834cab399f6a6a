pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{DietError, Result};
pub use models::{DietPlan, FoodItem, UserMetrics};
pub use planner::compute_diet_plan;
