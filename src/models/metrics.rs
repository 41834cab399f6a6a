use serde::{Deserialize, Serialize};

use crate::planner::constants::CM_PER_FOOT;

/// Biological sex category, used only to select the BMR formula branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Activity tier, ordered from least to most active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly active",
            ActivityLevel::ModeratelyActive => "moderately active",
            ActivityLevel::VeryActive => "very active",
            ActivityLevel::ExtraActive => "extra active",
        }
    }
}

/// Direction of the user's weight goal, derived from current vs target weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightGoal {
    Lose,
    Gain,
    Maintain,
}

/// Body metrics collected once per calculation.
///
/// Height is stored as whole feet; weights are kilograms. The value is
/// immutable and carries no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMetrics {
    pub height_feet: u32,
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub age_years: u32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
}

impl UserMetrics {
    /// Height in centimetres. The stored whole-feet value is converted
    /// directly, so fractional feet are never represented.
    pub fn height_cm(&self) -> f64 {
        self.height_feet as f64 * CM_PER_FOOT
    }

    /// Goal direction: above target is a loss goal, below is a gain goal.
    pub fn goal(&self) -> WeightGoal {
        if self.current_weight_kg > self.target_weight_kg {
            WeightGoal::Lose
        } else if self.current_weight_kg < self.target_weight_kg {
            WeightGoal::Gain
        } else {
            WeightGoal::Maintain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_height_conversion() {
        let metrics = sample_metrics();
        assert!((metrics.height_cm() - 152.4).abs() < 1e-9);
    }

    #[test]
    fn test_goal_direction() {
        let mut metrics = sample_metrics();
        assert_eq!(metrics.goal(), WeightGoal::Lose);

        metrics.target_weight_kg = 75.0;
        assert_eq!(metrics.goal(), WeightGoal::Gain);

        metrics.target_weight_kg = metrics.current_weight_kg;
        assert_eq!(metrics.goal(), WeightGoal::Maintain);
    }

    #[test]
    fn test_metrics_from_json() {
        let json = r#"{
            "height_feet": 5,
            "current_weight_kg": 70.0,
            "target_weight_kg": 65.0,
            "age_years": 30,
            "sex": "male",
            "activity_level": "moderately_active"
        }"#;

        let metrics: UserMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics, sample_metrics());
    }
}
