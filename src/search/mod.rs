pub mod data_loader;
pub mod tiered_search;

pub use data_loader::{load_nutrition_records, load_nutrition_table};
pub use tiered_search::NutritionTable;
