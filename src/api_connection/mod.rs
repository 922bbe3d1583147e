pub mod calorie_fallback;
pub mod connection;
pub mod endpoints;

pub use calorie_fallback::UsdaCalorieFallback;
pub use connection::{build_http_client, ApiConnectionError, GoogleTranslator, Translator, UsdaClient};
