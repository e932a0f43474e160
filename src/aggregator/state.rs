//! Observable catalog state

use crate::error::AggregationError;
use crate::pokemon::PokemonRecord;
use chrono::{DateTime, Utc};

/// Outcome of the most recent aggregation run as seen by consumers.
///
/// `Loading` moves to `Ready` or `Failed` when a run settles. Leaving
/// `Failed` requires an explicit reload.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready {
        records: Vec<PokemonRecord>,
        loaded_at: DateTime<Utc>,
    },
    Failed(AggregationError),
}

impl CatalogState {
    pub fn ready(records: Vec<PokemonRecord>) -> Self {
        CatalogState::Ready {
            records,
            loaded_at: Utc::now(),
        }
    }

    /// Lowercase status label used in API responses
    pub fn status(&self) -> &'static str {
        match self {
            CatalogState::Loading => "loading",
            CatalogState::Ready { .. } => "ready",
            CatalogState::Failed(_) => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn records(&self) -> Option<&[PokemonRecord]> {
        match self {
            CatalogState::Ready { records, .. } => Some(records),
            _ => None,
        }
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        match self {
            CatalogState::Ready { loaded_at, .. } => Some(*loaded_at),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AggregationError> {
        match self {
            CatalogState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
