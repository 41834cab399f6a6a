use std::collections::HashMap;
use std::sync::LazyLock;

use strsim::jaro_winkler;

use crate::models::{FoodCategory, FoodItem};

/// Minimum similarity for a fuzzy search hit.
const SEARCH_THRESHOLD: f64 = 0.7;

/// Foods recommended with every plan.
static RECOMMENDED_FOODS: LazyLock<Vec<FoodItem>> = LazyLock::new(|| {
    vec![
        FoodItem::new("Chicken Breast", 165, 31.0, 0.0, 3.6, "100g", FoodCategory::Protein),
        FoodItem::new("Salmon", 208, 22.0, 0.0, 13.0, "100g", FoodCategory::Protein),
        FoodItem::new("Eggs", 140, 12.0, 0.0, 10.0, "2 eggs", FoodCategory::Protein),
        FoodItem::new("Quinoa", 120, 4.4, 21.3, 1.9, "100g", FoodCategory::Carbs),
        FoodItem::new("Sweet Potato", 86, 1.6, 20.0, 0.1, "100g", FoodCategory::Carbs),
        FoodItem::new("Brown Rice", 110, 2.5, 23.0, 0.9, "100g", FoodCategory::Carbs),
    ]
});

/// Foods flagged to avoid with every plan.
static FOODS_TO_AVOID: LazyLock<Vec<FoodItem>> = LazyLock::new(|| {
    vec![
        FoodItem::new("Processed Sugar", 387, 0.0, 100.0, 0.0, "100g", FoodCategory::Carbs),
        FoodItem::new("Fried Foods", 312, 14.0, 35.0, 15.0, "100g", FoodCategory::Fats),
        FoodItem::new("Soda", 150, 0.0, 39.0, 0.0, "355ml", FoodCategory::Carbs),
    ]
});

static BREAKFAST_FOODS: LazyLock<Vec<FoodItem>> = LazyLock::new(|| {
    vec![
        FoodItem::new("Oatmeal with Berries", 150, 6.0, 27.0, 3.0, "1 cup", FoodCategory::Carbs),
        FoodItem::new("Eggs", 140, 12.0, 0.0, 10.0, "2 whole eggs", FoodCategory::Protein),
    ]
});

/// Shared by the morning and evening snack slots.
static SNACK_FOODS: LazyLock<Vec<FoodItem>> = LazyLock::new(|| {
    vec![
        FoodItem::new("Almonds", 160, 6.0, 6.0, 14.0, "28g", FoodCategory::Fats),
        FoodItem::new("Apple", 95, 0.5, 25.0, 0.3, "1 medium", FoodCategory::Fruits),
    ]
});

static LUNCH_FOODS: LazyLock<Vec<FoodItem>> = LazyLock::new(|| {
    vec![
        FoodItem::new("Grilled Chicken Breast", 165, 31.0, 0.0, 3.6, "100g", FoodCategory::Protein),
        FoodItem::new("Brown Rice", 110, 2.5, 23.0, 0.9, "100g", FoodCategory::Carbs),
    ]
});

static DINNER_FOODS: LazyLock<Vec<FoodItem>> = LazyLock::new(|| {
    vec![
        FoodItem::new("Salmon", 208, 22.0, 0.0, 13.0, "100g", FoodCategory::Protein),
        FoodItem::new("Quinoa", 120, 4.4, 21.3, 1.9, "100g", FoodCategory::Carbs),
    ]
});

pub fn recommended_foods() -> &'static [FoodItem] {
    &RECOMMENDED_FOODS
}

pub fn foods_to_avoid() -> &'static [FoodItem] {
    &FOODS_TO_AVOID
}

pub fn breakfast_foods() -> &'static [FoodItem] {
    &BREAKFAST_FOODS
}

pub fn snack_foods() -> &'static [FoodItem] {
    &SNACK_FOODS
}

pub fn lunch_foods() -> &'static [FoodItem] {
    &LUNCH_FOODS
}

pub fn dinner_foods() -> &'static [FoodItem] {
    &DINNER_FOODS
}

/// Every distinct food across all tables, deduplicated by lowercase name
/// (first occurrence wins; meal-slot entries repeat recommended items).
pub fn all_foods() -> Vec<&'static FoodItem> {
    let tables: [&'static [FoodItem]; 6] = [
        recommended_foods(),
        foods_to_avoid(),
        breakfast_foods(),
        snack_foods(),
        lunch_foods(),
        dinner_foods(),
    ];

    let mut seen: HashMap<String, &'static FoodItem> = HashMap::new();
    let mut foods = Vec::new();
    for table in tables {
        for food in table {
            if !seen.contains_key(&food.key()) {
                seen.insert(food.key(), food);
                foods.push(food);
            }
        }
    }

    foods
}

/// Foods in a single category, across all tables.
pub fn foods_in_category(category: FoodCategory) -> Vec<&'static FoodItem> {
    all_foods()
        .into_iter()
        .filter(|f| f.category == category)
        .collect()
}

/// Fuzzy-search the catalog by name.
///
/// Returns matches above the similarity threshold, best first. An exact
/// (case-insensitive) match always ranks at the top.
pub fn search(query: &str) -> Vec<&'static FoodItem> {
    let query = query.to_lowercase();

    let mut candidates: Vec<(&'static FoodItem, f64)> = all_foods()
        .into_iter()
        .map(|f| (f, jaro_winkler(&f.key(), &query)))
        .filter(|(_, score)| *score > SEARCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates.into_iter().map(|(f, _)| f).collect()
}
