//! Application state shared across handlers

use crate::aggregator::{Aggregator, CatalogState};
use crate::catalog::PokeApi;
use crate::config::Settings;
use crate::metrics::Metrics;
use crate::network::HttpClient;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Catalog aggregator
    pub aggregator: Arc<Aggregator>,
    /// Outcome of the latest aggregation run
    pub catalog: Arc<RwLock<CatalogState>>,
    /// Ticket of the most recently started run
    run_seq: Arc<AtomicU64>,
}

impl AppState {
    /// Create new application state around an existing aggregator
    pub fn new(settings: Settings, aggregator: Aggregator) -> Self {
        Self {
            settings: Arc::new(settings),
            aggregator: Arc::new(aggregator),
            catalog: Arc::new(RwLock::new(CatalogState::Loading)),
            run_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Wire the HTTP client, PokéAPI source and aggregator from settings
    pub fn from_settings(settings: Settings) -> anyhow::Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        info!("HTTP client initialized");

        let source = PokeApi::new(client, settings.catalog.base_url.clone());
        let aggregator = Aggregator::new(Arc::new(source))
            .with_metrics(Arc::new(Metrics::new()))
            .with_max_in_flight(settings.catalog.max_in_flight);

        Ok(Self::new(settings, aggregator))
    }

    /// Start a new aggregation run and publish its outcome.
    ///
    /// Only the most recently started run may publish. A run that settles
    /// after a newer one has started is discarded, and the caller gets the
    /// currently published state instead.
    pub async fn reload(&self) -> CatalogState {
        let ticket = {
            let mut catalog = self.catalog.write().await;
            let ticket = self.run_seq.fetch_add(1, Ordering::SeqCst) + 1;
            *catalog = CatalogState::Loading;
            ticket
        };

        let next = self.aggregator.load(self.settings.catalog.count).await;

        let mut catalog = self.catalog.write().await;
        if self.run_seq.load(Ordering::SeqCst) != ticket {
            debug!("Discarding {} outcome of superseded run {}", next.status(), ticket);
            return catalog.clone();
        }
        *catalog = next.clone();
        info!("Catalog is now {}", next.status());

        next
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        self.aggregator.metrics()
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
