//! REST client for the hero catalog API.
//!
//! Wraps the two read endpoints (`GET /heroes`, `GET /hero`) using
//! [`reqwest`], and runs every payload through the validator before it
//! leaves this crate.

use async_trait::async_trait;
use serde_json::Value;

use heroes_core::hero::{Hero, HeroId, HeroPage, PaginationParams};
use heroes_core::ports::{HeroRepository, RepositoryError};
use heroes_core::validator::{sanitize_hero, sanitize_page};

use crate::config::ClientConfig;
use crate::error::HeroApiError;

/// HTTP adapter for the catalog API.
#[derive(Debug, Clone)]
pub struct HeroApi {
    client: reqwest::Client,
    base_url: String,
}

impl HeroApi {
    /// Create a client with the configured base URL and timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, HeroApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of the listing.
    ///
    /// Sends `GET /heroes`, with `page` and `size` only when set. A missing
    /// `items` array is treated as empty before validation.
    pub async fn fetch_heroes(&self, params: PaginationParams) -> Result<HeroPage, HeroApiError> {
        tracing::debug!(page = ?params.page, size = ?params.size, "Fetching hero page");

        let response = self
            .client
            .get(format!("{}/heroes", self.base_url))
            .query(&params.query_pairs())
            .send()
            .await?;

        let mut body = Self::parse_response(response).await?;
        if let Some(obj) = body.as_object_mut() {
            let items = obj.entry("items").or_insert(Value::Null);
            if items.is_null() {
                *items = Value::Array(Vec::new());
            }
        }

        Ok(sanitize_page(&body)?)
    }

    /// Fetch a single hero by id via `GET /hero?id=`.
    pub async fn fetch_hero(&self, id: HeroId) -> Result<Hero, HeroApiError> {
        tracing::debug!(id, "Fetching hero");

        let response = self
            .client
            .get(format!("{}/hero", self.base_url))
            .query(&[("id", id.to_string())])
            .send()
            .await?;

        let body = Self::parse_response(response).await?;
        Ok(sanitize_hero(&body)?)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, or return a
    /// [`HeroApiError::Status`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, HeroApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(HeroApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Read a successful response body as untyped JSON.
    async fn parse_response(response: reqwest::Response) -> Result<Value, HeroApiError> {
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl HeroRepository for HeroApi {
    async fn get_heroes(&self, params: PaginationParams) -> Result<HeroPage, RepositoryError> {
        Ok(self.fetch_heroes(params).await?)
    }

    async fn get_hero_by_id(&self, id: HeroId) -> Result<Hero, RepositoryError> {
        Ok(self.fetch_hero(id).await?)
    }
}
