//! Pokedex-RS: a Pokédex catalog aggregator backed by PokéAPI
//!
//! Fetches catalog entries concurrently, normalizes them into
//! [`PokemonRecord`]s and filters the aggregated list by name or id.

pub mod aggregator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod network;
pub mod pokemon;
pub mod search;
pub mod web;

pub use aggregator::{Aggregator, CatalogState};
pub use config::Settings;
pub use error::{AggregationError, LookupError};
pub use pokemon::PokemonRecord;
pub use search::{filter, SearchIndex};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default catalog API root
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";

/// Default number of entries fetched per aggregation run
pub const DEFAULT_CATALOG_COUNT: u32 = 100;
