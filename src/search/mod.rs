//! Search module
//!
//! Filters aggregated records by name or display id.

mod index;

pub use index::{filter, matches, SearchIndex};
