pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_plan_csv;
pub use prompts::{
    collect_user_metrics, prompt_activity_level, prompt_age, prompt_height_feet, prompt_sex,
    prompt_weight_kg, prompt_yes_no,
};
pub use render::{display_diet_plan, display_food_list};
