use log::warn;
use std::env;
use std::time::Duration;

use crate::api_connection::endpoints::{DEFAULT_TRANSLATE_BASE_URL, DEFAULT_USDA_BASE_URL};

pub const USDA_API_KEY_ENV_VAR: &str = "USDA_API_KEY";
pub const USDA_BASE_URL_ENV_VAR: &str = "USDA_BASE_URL";
pub const TRANSLATE_BASE_URL_ENV_VAR: &str = "TRANSLATE_BASE_URL";
pub const TRANSLATE_SOURCE_LANG_ENV_VAR: &str = "TRANSLATE_SOURCE_LANG";
pub const TRANSLATE_TARGET_LANG_ENV_VAR: &str = "TRANSLATE_TARGET_LANG";
pub const HTTP_TIMEOUT_ENV_VAR: &str = "HTTP_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings for the external collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub usda_api_key: Option<String>,
    pub usda_base_url: String,
    pub translate_base_url: String,
    pub source_language: String,
    pub target_language: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Reads settings from the environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let request_timeout = match non_empty(HTTP_TIMEOUT_ENV_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "Ignoring invalid {}='{}', using {}s",
                        HTTP_TIMEOUT_ENV_VAR, raw, DEFAULT_TIMEOUT_SECS
                    );
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Self {
            usda_api_key: non_empty(USDA_API_KEY_ENV_VAR),
            usda_base_url: non_empty(USDA_BASE_URL_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_USDA_BASE_URL.to_string()),
            translate_base_url: non_empty(TRANSLATE_BASE_URL_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_TRANSLATE_BASE_URL.to_string()),
            source_language: non_empty(TRANSLATE_SOURCE_LANG_ENV_VAR).unwrap_or_else(|| "ko".to_string()),
            target_language: non_empty(TRANSLATE_TARGET_LANG_ENV_VAR).unwrap_or_else(|| "en".to_string()),
            request_timeout,
        }
    }
}
