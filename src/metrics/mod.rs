//! Metrics collection module
//!
//! Tracks aggregation runs, lookup latency and lookup error rates.

use serde::Serialize;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Number of lookup latencies kept for the rolling average
const LATENCY_WINDOW: usize = 100;

/// Lookup and run counters shared by the aggregator and the web layer
pub struct Metrics {
    runs: AtomicU64,
    failed_runs: AtomicU64,
    lookup_successes: AtomicU64,
    lookup_errors: AtomicU64,
    /// Most recent lookup latencies in ms
    response_times: RwLock<VecDeque<u64>>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            runs: AtomicU64::new(0),
            failed_runs: AtomicU64::new(0),
            lookup_successes: AtomicU64::new(0),
            lookup_errors: AtomicU64::new(0),
            response_times: RwLock::new(VecDeque::with_capacity(LATENCY_WINDOW)),
        }
    }

    /// Record the start of an aggregation run
    pub fn inc_run(&self) {
        self.runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an aggregation run that ended in failure
    pub fn inc_failed_run(&self) {
        self.failed_runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the outcome and latency of one lookup
    pub fn record_lookup(&self, success: bool, time_ms: u64) {
        if success {
            self.lookup_successes.fetch_add(1, Ordering::Relaxed);
        } else {
            self.lookup_errors.fetch_add(1, Ordering::Relaxed);
        }

        if let Ok(mut times) = self.response_times.write() {
            if times.len() >= LATENCY_WINDOW {
                times.pop_front();
            }
            times.push_back(time_ms);
        }
    }

    /// Average lookup latency over the window
    pub fn avg_response_time(&self) -> Option<u64> {
        let times = self.response_times.read().ok()?;
        if times.is_empty() {
            None
        } else {
            Some(times.iter().sum::<u64>() / times.len() as u64)
        }
    }

    /// Percentage of successful lookups
    pub fn reliability(&self) -> f64 {
        let successes = self.lookup_successes.load(Ordering::Relaxed);
        let errors = self.lookup_errors.load(Ordering::Relaxed);

        let total = successes + errors;
        if total == 0 {
            100.0
        } else {
            (successes as f64 / total as f64) * 100.0
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let lookup_successes = self.lookup_successes.load(Ordering::Relaxed);
        let lookup_errors = self.lookup_errors.load(Ordering::Relaxed);
        MetricsSnapshot {
            runs: self.runs.load(Ordering::Relaxed),
            failed_runs: self.failed_runs.load(Ordering::Relaxed),
            lookups: lookup_successes + lookup_errors,
            lookup_errors,
            avg_response_time_ms: self.avg_response_time(),
            reliability: self.reliability(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub runs: u64,
    pub failed_runs: u64,
    pub lookups: u64,
    pub lookup_errors: u64,
    pub avg_response_time_ms: Option<u64>,
    pub reliability: f64,
}
