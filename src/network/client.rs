//! HTTP client for making requests to the catalog API

use crate::catalog::{CatalogRequest, CatalogResponse};
use crate::config::OutgoingSettings;
use crate::error::LookupError;
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client wrapper configured from the outgoing settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> anyhow::Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .build()?;

        let user_agent = settings
            .useragent
            .clone()
            .unwrap_or_else(default_user_agent);

        Ok(Self { client, user_agent })
    }

    /// Execute a catalog request
    ///
    /// Only transport failures are errors here; status handling is left to the caller.
    pub async fn execute(&self, request: CatalogRequest) -> Result<CatalogResponse, LookupError> {
        let response = self
            .client
            .get(&request.url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Simple GET request
    pub async fn get(&self, url: &str) -> Result<CatalogResponse, LookupError> {
        self.execute(CatalogRequest::get(url)).await
    }

    async fn parse_response(response: Response) -> Result<CatalogResponse, LookupError> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(CatalogResponse { status, text, url })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn default_user_agent() -> String {
    format!("pokedex-rs/{}", crate::VERSION)
}
