//! Catalog source traits and types

use super::models::RawPokemon;
use crate::error::LookupError;
use async_trait::async_trait;

/// HTTP request to be made against the catalog
#[derive(Debug, Clone)]
pub struct CatalogRequest {
    /// URL to request
    pub url: String,
}

impl CatalogRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// HTTP response from a catalog request
#[derive(Debug)]
pub struct CatalogResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl CatalogResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, LookupError> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A read-only catalog that returns one raw entry per integer id
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Source name used in logs and metrics
    fn name(&self) -> &str;

    /// Fetch the raw entry for `id`
    async fn lookup(&self, id: u32) -> Result<RawPokemon, LookupError>;
}
