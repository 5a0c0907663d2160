//! HTTP API client for page bootstrap fetches.
//!
//! Pages load their initial table data over plain JSON GETs; everything
//! after that arrives through the live channel.

use anyhow::{ensure, Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config;

/// Thin JSON-over-HTTP client for the Ludex API.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// GET a JSON resource, e.g. `get_json::<Vec<GameRow>>("/api/games")`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = config::api_url(path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;
        ensure!(resp.status().is_success(), "GET {url}: {}", resp.status());
        resp.json::<T>()
            .await
            .with_context(|| format!("GET {url}: invalid response body"))
    }
}
