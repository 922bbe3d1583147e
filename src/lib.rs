pub mod api_connection;
pub mod calorie_scaler;
pub mod cli;
pub mod config;
pub mod daily_intake;
pub mod ingredient_annotator;
pub mod meal_aggregator;
pub mod measurement_parser;
pub mod models;
pub mod nutritional_matcher;
pub mod search;
