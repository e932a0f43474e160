//! Catalog aggregation module
//!
//! Fans lookups out across the catalog source, normalizes each entry and
//! joins the results into an ordered record sequence.

mod executor;
mod state;

pub use executor::Aggregator;
pub use state::CatalogState;
