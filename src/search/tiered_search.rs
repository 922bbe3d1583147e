use log::debug;

use crate::models::{LookupTier, NutritionRecord};

/// Read-only nutrition reference table, built once at startup and shared by
/// reference with every lookup.
#[derive(Debug, Clone, Default)]
pub struct NutritionTable {
    records: Vec<NutritionRecord>,
}

impl NutritionTable {
    pub fn new(records: Vec<NutritionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[NutritionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose name, alternate name or category equals `query`, ignoring case.
    pub fn find_exact(&self, query: &str) -> Option<&NutritionRecord> {
        let needle = query.to_lowercase();
        self.records.iter().find(|record| {
            record
                .searchable_names()
                .iter()
                .any(|field| field.to_lowercase() == needle)
        })
    }

    /// First record where `query` occurs inside any searchable name, ignoring case.
    pub fn find_partial(&self, query: &str) -> Option<&NutritionRecord> {
        let needle = query.to_lowercase();
        self.records.iter().find(|record| {
            record
                .searchable_names()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
    }

    /// Runs the exact tier, then the partial tier. First hit in table order wins.
    ///
    /// A blank query matches nothing. Taken literally, the partial tier would
    /// match every record on an empty needle and return the first row.
    pub fn search(&self, query: &str) -> Option<(&NutritionRecord, LookupTier)> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(record) = self.find_exact(query) {
            debug!("Exact match for '{}': '{}'", query, record.name);
            return Some((record, LookupTier::Exact));
        }
        if let Some(record) = self.find_partial(query) {
            debug!("Partial match for '{}': '{}'", query, record.name);
            return Some((record, LookupTier::Partial));
        }
        None
    }

    /// Distinct food names, sorted case-insensitively.
    pub fn food_options(&self) -> Vec<String> {
        let mut options: Vec<String> = self.records.iter().map(|r| r.name.clone()).collect();
        options.sort();
        options.dedup();
        options.sort_by_key(|name| name.to_lowercase());
        options
    }
}
