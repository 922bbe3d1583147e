use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use super::endpoints::{extract_translation, UsdaFood, UsdaSearchResponse};

#[derive(Debug, Error)]
pub enum ApiConnectionError {
    #[error("API key not found in environment: {0}")]
    MissingApiKey(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("API error {status}: {error_body}")]
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },

    #[error("Translation failed: {0}")]
    Translation(String),
}

pub fn build_http_client(timeout: Duration) -> Result<Client, ApiConnectionError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ApiConnectionError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        return Err(ApiConnectionError::ApiError { status, error_body });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, ApiConnectionError>;
}

/// Client for the public `translate_a/single` endpoint.
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
    source_language: String,
    target_language: String,
}

impl GoogleTranslator {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<String, ApiConnectionError> {
        let url = format!("{}/translate_a/single", self.base_url);
        let request = self.client.get(&url).query(&[
            ("client", "gtx"),
            ("sl", self.source_language.as_str()),
            ("tl", self.target_language.as_str()),
            ("dt", "t"),
            ("q", text),
        ]);
        let payload: serde_json::Value = get_json(request).await?;
        let translated = extract_translation(&payload).ok_or_else(|| {
            ApiConnectionError::Translation(format!("no translation returned for '{}'", text))
        })?;
        debug!("Translated '{}' -> '{}'", text, translated);
        Ok(translated)
    }
}

/// USDA FoodData Central search client.
pub struct UsdaClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl UsdaClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Returns the best-ranked food for `query`, if the search found any.
    pub async fn search_top_food(&self, query: &str) -> Result<Option<UsdaFood>, ApiConnectionError> {
        if self.api_key.is_empty() {
            return Err(ApiConnectionError::MissingApiKey("USDA_API_KEY".to_string()));
        }

        let url = format!("{}/foods/search", self.base_url);
        let request = self.client.get(&url).query(&[
            ("query", query),
            ("pageSize", "1"),
            ("api_key", self.api_key.as_str()),
        ]);
        let response: UsdaSearchResponse = get_json(request).await?;
        Ok(response.foods.into_iter().next())
    }
}
