use serde::{Deserialize, Serialize};

/// Broad food group a catalog item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Carbs,
    Fats,
    Vegetables,
    Fruits,
    Dairy,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 6] = [
        FoodCategory::Protein,
        FoodCategory::Carbs,
        FoodCategory::Fats,
        FoodCategory::Vegetables,
        FoodCategory::Fruits,
        FoodCategory::Dairy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FoodCategory::Protein => "protein",
            FoodCategory::Carbs => "carbs",
            FoodCategory::Fats => "fats",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Fruits => "fruits",
            FoodCategory::Dairy => "dairy",
        }
    }

    /// Parse a category from user-supplied text (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.to_lowercase();
        FoodCategory::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// A catalog food item with per-serving nutritional data.
///
/// Items are immutable static records; nothing mutates them after the
/// catalog tables are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub serving_size: String,
    pub category: FoodCategory,
}

impl FoodItem {
    pub fn new(
        name: &str,
        calories: u32,
        protein: f64,
        carbs: f64,
        fats: f64,
        serving_size: &str,
        category: FoodCategory,
    ) -> Self {
        Self {
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fats,
            serving_size: serving_size.to_string(),
            category,
        }
    }

    /// Canonical key for deduplication and lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Basic validation: gram quantities must be non-negative.
    pub fn is_valid(&self) -> bool {
        self.protein >= 0.0 && self.carbs >= 0.0 && self.fats >= 0.0
    }
}
