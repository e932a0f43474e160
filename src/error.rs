//! Error types for catalog lookups and aggregation runs

use serde::Serialize;

/// Failure of a single catalog lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Transport or connectivity failure
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream answered with a non-success status
    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },

    /// Missing or invalid expected field in the payload
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl LookupError {
    pub fn code_str(&self) -> &'static str {
        match self {
            LookupError::Network(_) => "network_error",
            LookupError::HttpStatus { .. } => "http_status_error",
            LookupError::MalformedPayload(_) => "malformed_payload",
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::MalformedPayload(err.to_string())
    }
}

/// Failure of a whole aggregation run.
///
/// Carries the id of the lookup that failed. No partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to fetch catalog entry {failing_id}: {cause}")]
pub struct AggregationError {
    pub failing_id: u32,
    #[source]
    pub cause: LookupError,
}

impl AggregationError {
    pub fn new(failing_id: u32, cause: LookupError) -> Self {
        Self { failing_id, cause }
    }
}

/// Serializable view of an aggregation failure for API responses
#[derive(Debug, Clone, Serialize)]
pub struct ErrorSummary {
    pub failing_id: u32,
    pub kind: &'static str,
    pub message: String,
}

impl From<&AggregationError> for ErrorSummary {
    fn from(err: &AggregationError) -> Self {
        Self {
            failing_id: err.failing_id,
            kind: err.cause.code_str(),
            message: err.to_string(),
        }
    }
}
