//! Settings structures for Pokedex-RS configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::Semaphore;
use url::Url;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub catalog: CatalogSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (POKEDEX_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable source
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("POKEDEX_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = lookup("POKEDEX_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("POKEDEX_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = lookup("POKEDEX_CATALOG_URL") {
            self.catalog.base_url = val;
        }
        if let Some(val) = lookup("POKEDEX_CATALOG_COUNT") {
            if let Ok(count) = val.parse() {
                self.catalog.count = count;
            }
        }
        if let Some(val) = lookup("POKEDEX_MAX_IN_FLIGHT") {
            self.catalog.max_in_flight = val.parse().ok().filter(|n: &usize| *n > 0);
        }
    }

    /// Check values that serde cannot validate on its own
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.catalog.base_url).map_err(|e| {
            anyhow::anyhow!("Invalid catalog base_url '{}': {}", self.catalog.base_url, e)
        })?;
        if self.outgoing.request_timeout <= 0.0 {
            anyhow::bail!("outgoing.request_timeout must be positive");
        }
        match self.catalog.max_in_flight {
            Some(0) => anyhow::bail!("catalog.max_in_flight must be at least 1"),
            Some(n) if n > Semaphore::MAX_PERMITS => anyhow::bail!(
                "catalog.max_in_flight must be at most {}",
                Semaphore::MAX_PERMITS
            ),
            _ => {}
        }
        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name reported on the home endpoint
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Pokédex".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Transport timeout per request in seconds
    pub request_timeout: f64,
    /// Max idle connections kept per host
    pub pool_maxsize: usize,
    /// User agent sent with every request (none = crate default)
    pub useragent: Option<String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            pool_maxsize: 20,
            useragent: None,
        }
    }
}

/// Catalog source and aggregation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// REST API root, without trailing slash
    pub base_url: String,
    /// Number of entries to aggregate (ids 1..=count)
    pub count: u32,
    /// Bound on concurrent lookups (none = one request per entry at once)
    pub max_in_flight: Option<usize>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_CATALOG_URL.to_string(),
            count: crate::DEFAULT_CATALOG_COUNT,
            max_in_flight: None,
        }
    }
}
