use async_trait::async_trait;
use log::debug;

use super::connection::{ApiConnectionError, Translator, UsdaClient};
use super::endpoints::USDA_REFERENCE_SERVING;
use crate::models::{CalorieReference, LookupTier};
use crate::nutritional_matcher::CalorieFallback;

/// Translates the food name, then takes the energy value of the top USDA search hit.
pub struct UsdaCalorieFallback<T: Translator> {
    translator: T,
    usda: UsdaClient,
}

impl<T: Translator> UsdaCalorieFallback<T> {
    pub fn new(translator: T, usda: UsdaClient) -> Self {
        Self { translator, usda }
    }
}

#[async_trait]
impl<T: Translator> CalorieFallback for UsdaCalorieFallback<T> {
    async fn lookup_external(&self, name: &str) -> Result<Option<CalorieReference>, ApiConnectionError> {
        let query = self.translator.translate(name).await?;
        let Some(food) = self.usda.search_top_food(&query).await? else {
            debug!("USDA search for '{}' returned no foods", query);
            return Ok(None);
        };

        Ok(food.energy_value().map(|calories| {
            debug!("USDA match for '{}': '{}' ({} kcal)", query, food.description, calories);
            CalorieReference {
                serving: USDA_REFERENCE_SERVING.to_string(),
                calories,
                source: LookupTier::External,
            }
        }))
    }
}
