use serde::{Deserialize, Serialize};

/// One row of the reference nutrition table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NutritionRecord {
    pub name: String,
    pub alt_name: String,
    pub category_name: String,
    pub reference_serving: String, // e.g. "100g"
    pub reference_calories: f64,
}

impl NutritionRecord {
    pub fn new(
        name: impl Into<String>,
        alt_name: impl Into<String>,
        category_name: impl Into<String>,
        reference_serving: impl Into<String>,
        reference_calories: f64,
    ) -> Self {
        Self {
            name: name.into(),
            alt_name: alt_name.into(),
            category_name: category_name.into(),
            reference_serving: reference_serving.into(),
            reference_calories,
        }
    }

    /// The three name-like columns searched by lookup, in priority order.
    pub fn searchable_names(&self) -> [&str; 3] {
        [&self.name, &self.alt_name, &self.category_name]
    }
}

/// Which lookup tier produced a calorie reference.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum LookupTier {
    Exact,
    Partial,
    External,
}

/// A resolved reference serving and its calorie value.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalorieReference {
    pub serving: String,
    pub calories: f64,
    pub source: LookupTier,
}

impl CalorieReference {
    pub fn from_record(record: &NutritionRecord, source: LookupTier) -> Self {
        Self {
            serving: record.reference_serving.clone(),
            calories: record.reference_calories,
            source,
        }
    }
}

/// An ingredient line as listed by a recipe: name, count and metric amount.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub metric: String,
}

impl Ingredient {
    /// Splits a listing such as `"닭가슴살 1개(200g)"` into name, quantity and metric.
    ///
    /// The metric is whatever sits inside the first pair of parentheses. The text
    /// before it is split on its last space into name and quantity.
    pub fn from_listing(line: &str) -> Self {
        let text = line.trim();
        if !(text.contains('(') && text.contains(')')) {
            return Self {
                name: text.to_string(),
                ..Default::default()
            };
        }

        let (left, right) = text.split_once('(').unwrap_or((text, ""));
        let metric = right.trim_end_matches(')').to_string();
        let left = left.trim();
        let (name, quantity) = match left.rsplit_once(' ') {
            Some((name, quantity)) => (name.to_string(), quantity.to_string()),
            None => (left.to_string(), String::new()),
        };

        Self {
            name,
            quantity,
            metric,
        }
    }
}

/// Calorie breakdown of one meal.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MealCalorieResult {
    pub total_calories: f64,
    pub line_items: Vec<String>,
}

/// Formats a calorie value for display; integral values drop the fraction.
pub fn format_kcal(calories: f64) -> String {
    format!("{} kcal", calories)
}
