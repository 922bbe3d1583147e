use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_USDA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
pub const DEFAULT_TRANSLATE_BASE_URL: &str = "https://translate.googleapis.com";

/// Serving basis of every USDA FoodData Central search result.
pub const USDA_REFERENCE_SERVING: &str = "100g";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UsdaSearchResponse {
    #[serde(default)]
    pub foods: Vec<UsdaFood>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UsdaFood {
    #[serde(rename = "fdcId", skip_serializing_if = "Option::is_none")]
    pub fdc_id: Option<u64>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "foodNutrients", default)]
    pub food_nutrients: Vec<UsdaFoodNutrient>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UsdaNutrientInfo {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "unitName", skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
}

/// A nutrient entry. Search results use the flat `nutrientName`/`value`
/// shape, food details use a nested `nutrient` object with `amount`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UsdaFoodNutrient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient: Option<UsdaNutrientInfo>,
    #[serde(rename = "nutrientName", skip_serializing_if = "Option::is_none")]
    pub nutrient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl UsdaFoodNutrient {
    pub fn name(&self) -> &str {
        self.nutrient
            .as_ref()
            .map(|n| n.name.as_str())
            .or(self.nutrient_name.as_deref())
            .unwrap_or("")
    }

    pub fn reported_value(&self) -> Option<f64> {
        self.value.or(self.amount)
    }
}

impl UsdaFood {
    /// Value of the first nutrient whose name mentions "energy".
    pub fn energy_value(&self) -> Option<f64> {
        self.food_nutrients
            .iter()
            .find(|n| n.name().to_lowercase().contains("energy"))
            .and_then(UsdaFoodNutrient::reported_value)
    }
}

/// Joins the translated segments of a `translate_a/single` response, whose
/// first element is a list of `[translated, original, ...]` arrays.
pub fn extract_translation(payload: &Value) -> Option<String> {
    let segments = payload.get(0)?.as_array()?;
    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();
    let translated = translated.trim();
    if translated.is_empty() {
        None
    } else {
        Some(translated.to_string())
    }
}
