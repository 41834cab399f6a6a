pub mod calculations;
pub mod catalog;
pub mod constants;

pub use calculations::{
    basal_metabolic_rate, compute_diet_plan, daily_calorie_target, daily_water_intake,
    macronutrient_split, maintenance_calories,
};
pub use constants::*;
