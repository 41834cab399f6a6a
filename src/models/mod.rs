mod food;
mod metrics;
mod plan;

pub use food::{FoodCategory, FoodItem};
pub use metrics::{ActivityLevel, Sex, UserMetrics, WeightGoal};
pub use plan::{DietPlan, DietRecommendations, Macronutrients, MealPlan};
