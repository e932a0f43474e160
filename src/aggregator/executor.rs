//! Catalog aggregation: fan-out lookups, normalize, join

use super::state::CatalogState;
use crate::catalog::CatalogSource;
use crate::error::{AggregationError, LookupError};
use crate::metrics::Metrics;
use crate::pokemon::PokemonRecord;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

/// Aggregator that fetches catalog entries 1..=count concurrently
pub struct Aggregator {
    /// Upstream catalog
    source: Arc<dyn CatalogSource>,
    /// Lookup counters
    metrics: Arc<Metrics>,
    /// Bound on concurrent lookups, unbounded when unset
    max_in_flight: Option<usize>,
}

impl Aggregator {
    /// Create a new aggregator over a catalog source
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            metrics: Arc::new(Metrics::new()),
            max_in_flight: None,
        }
    }

    /// Share a metrics collector
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Bound the number of lookups in flight; `None` or `0` leaves it unbounded.
    /// Limits above `Semaphore::MAX_PERMITS` are clamped to it.
    pub fn with_max_in_flight(mut self, limit: Option<usize>) -> Self {
        self.max_in_flight = limit
            .filter(|n| *n > 0)
            .map(|n| n.min(Semaphore::MAX_PERMITS));
        self
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Fetch and normalize entries `1..=count`.
    ///
    /// Records come back ordered by ascending catalog id. Every lookup is
    /// awaited before returning; if any failed, the lowest failing id is
    /// reported and no records are returned.
    pub async fn fetch_catalog(&self, count: u32) -> Result<Vec<PokemonRecord>, AggregationError> {
        self.metrics.inc_run();

        if count == 0 {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let limiter = self.max_in_flight.map(Semaphore::new);
        let limiter = limiter.as_ref();

        info!(
            "Fetching {} entries from {} (max in flight: {})",
            count,
            self.source.name(),
            self.max_in_flight
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unbounded".to_string())
        );

        let lookups = (1..=count).map(|id| async move {
            // the semaphore is never closed, so a failed acquire only means "no bound"
            let _permit = match limiter {
                Some(semaphore) => semaphore.acquire().await.ok(),
                None => None,
            };
            (id, self.lookup(id).await)
        });

        let outcomes = join_all(lookups).await;

        let mut slots: Vec<Option<PokemonRecord>> = (0..count).map(|_| None).collect();
        let mut failure: Option<AggregationError> = None;

        for (id, outcome) in outcomes {
            match outcome {
                Ok(record) => slots[(id - 1) as usize] = Some(record),
                Err(cause) => {
                    if failure.as_ref().map_or(true, |f| id < f.failing_id) {
                        failure = Some(AggregationError::new(id, cause));
                    }
                }
            }
        }

        if let Some(err) = failure {
            self.metrics.inc_failed_run();
            error!("Catalog aggregation failed after {:?}: {}", start.elapsed(), err);
            return Err(err);
        }

        let records: Vec<PokemonRecord> = slots.into_iter().flatten().collect();
        info!("Fetched {} entries in {:?}", records.len(), start.elapsed());

        Ok(records)
    }

    /// Run an aggregation and fold the outcome into a catalog state
    pub async fn load(&self, count: u32) -> CatalogState {
        match self.fetch_catalog(count).await {
            Ok(records) => CatalogState::ready(records),
            Err(err) => CatalogState::Failed(err),
        }
    }

    /// Fetch one entry and normalize it
    async fn lookup(&self, id: u32) -> Result<PokemonRecord, LookupError> {
        let start = Instant::now();

        let result = self.source.lookup(id).await.and_then(|raw| {
            if raw.id != id {
                return Err(LookupError::MalformedPayload(format!(
                    "requested entry {} but received {}",
                    id, raw.id
                )));
            }
            PokemonRecord::try_from(raw)
        });

        let elapsed = start.elapsed();
        self.metrics
            .record_lookup(result.is_ok(), elapsed.as_millis() as u64);

        match &result {
            Ok(record) => debug!("Entry {} ({}) fetched in {:?}", id, record.name, elapsed),
            Err(e) => warn!("Entry {} failed: {}", id, e),
        }

        result
    }
}
