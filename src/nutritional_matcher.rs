use async_trait::async_trait;
use log::{debug, warn};

use crate::api_connection::connection::ApiConnectionError;
use crate::models::CalorieReference;
use crate::search::NutritionTable;

/// Source of calorie data consulted when the local table has no match.
///
/// `Ok(None)` means the source had nothing for the name. `Err` is reserved for
/// transport, translation or API failures.
#[async_trait]
pub trait CalorieFallback: Send + Sync {
    async fn lookup_external(&self, name: &str) -> Result<Option<CalorieReference>, ApiConnectionError>;
}

/// Tiered calorie lookup: exact match, partial match, then the external fallback.
pub struct NutritionalIndex<'a> {
    table: &'a NutritionTable,
    fallback: Option<Box<dyn CalorieFallback + 'a>>,
}

impl<'a> NutritionalIndex<'a> {
    /// Lookup restricted to the local table.
    pub fn local(table: &'a NutritionTable) -> Self {
        Self { table, fallback: None }
    }

    pub fn with_fallback(table: &'a NutritionTable, fallback: impl CalorieFallback + 'a) -> Self {
        Self {
            table,
            fallback: Some(Box::new(fallback)),
        }
    }

    pub fn table(&self) -> &NutritionTable {
        self.table
    }

    /// Resolves the reference serving and calories for `name`.
    ///
    /// Collaborator failures are passed to `progress_updater` and logged, then
    /// treated as a miss.
    pub async fn lookup(
        &self,
        name: &str,
        progress_updater: &impl Fn(String),
    ) -> Option<CalorieReference> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        if let Some((record, tier)) = self.table.search(name) {
            return Some(CalorieReference::from_record(record, tier));
        }

        let fallback = self.fallback.as_ref()?;
        debug!("No local match for '{}', querying external source", name);
        match fallback.lookup_external(name).await {
            Ok(found) => found,
            Err(e) => {
                warn!("External calorie lookup for '{}' failed: {}", name, e);
                progress_updater(format!("Calorie lookup for '{}' failed: {}", name, e));
                None
            }
        }
    }
}
