//! HTTP networking module
//!
//! Provides the HTTP client used to reach the catalog API.

mod client;

pub use client::HttpClient;
