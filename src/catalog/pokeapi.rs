//! PokéAPI catalog source

use super::models::RawPokemon;
use super::traits::*;
use crate::error::LookupError;
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::debug;

/// Detail lookups against `{base_url}/pokemon/{id}`
pub struct PokeApi {
    client: HttpClient,
    base_url: String,
}

impl PokeApi {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the detail request for one entry
    pub fn request(&self, id: u32) -> CatalogRequest {
        CatalogRequest::get(format!("{}/pokemon/{}", self.base_url, id))
    }

    /// Parse a detail response into the raw entry
    pub fn response(&self, response: CatalogResponse) -> Result<RawPokemon, LookupError> {
        if !response.is_success() {
            return Err(LookupError::HttpStatus {
                status: response.status,
            });
        }

        response.json()
    }
}

#[async_trait]
impl CatalogSource for PokeApi {
    fn name(&self) -> &str {
        "pokeapi"
    }

    async fn lookup(&self, id: u32) -> Result<RawPokemon, LookupError> {
        let request = self.request(id);
        debug!("GET {}", request.url);
        let response = self.client.execute(request).await?;
        self.response(response)
    }
}
