//! Metrics collection for the Xtreme client.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

/// Metrics collector interface.
pub trait MetricsCollector: Send + Sync {
    /// Records a request.
    fn record_request(&self, operation: &str, success: bool, duration: Duration);

    /// Records an error.
    fn record_error(&self, error_kind: &str);

    /// Gets current metrics.
    fn get_metrics(&self) -> RequestMetrics;

    /// Resets all metrics.
    fn reset(&self);
}

/// Request metrics snapshot.
#[derive(Debug, Clone, Default)]
pub struct RequestMetrics {
    /// Total requests.
    pub total_requests: u64,
    /// Successful requests.
    pub successful_requests: u64,
    /// Failed requests.
    pub failed_requests: u64,
    /// Total latency in milliseconds.
    pub total_latency_ms: u64,
    /// Requests per operation.
    pub operations: HashMap<String, u64>,
    /// Error counts by kind.
    pub errors: HashMap<String, u64>,
}

impl RequestMetrics {
    /// Calculates average latency in milliseconds.
    pub fn average_latency_ms(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.total_latency_ms as f64 / self.total_requests as f64
        }
    }

    /// Calculates success rate as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.total_requests == 0 {
            100.0
        } else {
            (self.successful_requests as f64 / self.total_requests as f64) * 100.0
        }
    }

    /// Returns how often an operation was called.
    pub fn operation_count(&self, operation: &str) -> u64 {
        self.operations.get(operation).copied().unwrap_or(0)
    }
}

/// Default metrics collector implementation.
#[derive(Default)]
pub struct DefaultMetricsCollector {
    total_requests: AtomicU64,
    successful_requests: AtomicU64,
    failed_requests: AtomicU64,
    total_latency_ms: AtomicU64,
    operations: RwLock<HashMap<String, u64>>,
    errors: RwLock<HashMap<String, u64>>,
}

impl DefaultMetricsCollector {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(map: &RwLock<HashMap<String, u64>>, key: &str) {
        let mut map = map.write().unwrap_or_else(PoisonError::into_inner);
        *map.entry(key.to_string()).or_insert(0) += 1;
    }

    fn snapshot(map: &RwLock<HashMap<String, u64>>) -> HashMap<String, u64> {
        map.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl MetricsCollector for DefaultMetricsCollector {
    fn record_request(&self, operation: &str, success: bool, duration: Duration) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        if success {
            self.successful_requests.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_requests.fetch_add(1, Ordering::Relaxed);
        }

        let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.total_latency_ms.fetch_add(ms, Ordering::Relaxed);

        Self::bump(&self.operations, operation);
    }

    fn record_error(&self, error_kind: &str) {
        Self::bump(&self.errors, error_kind);
    }

    fn get_metrics(&self) -> RequestMetrics {
        RequestMetrics {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            successful_requests: self.successful_requests.load(Ordering::Relaxed),
            failed_requests: self.failed_requests.load(Ordering::Relaxed),
            total_latency_ms: self.total_latency_ms.load(Ordering::Relaxed),
            operations: Self::snapshot(&self.operations),
            errors: Self::snapshot(&self.errors),
        }
    }

    fn reset(&self) {
        self.total_requests.store(0, Ordering::Relaxed);
        self.successful_requests.store(0, Ordering::Relaxed);
        self.failed_requests.store(0, Ordering::Relaxed);
        self.total_latency_ms.store(0, Ordering::Relaxed);
        self.operations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.errors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl std::fmt::Debug for DefaultMetricsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultMetricsCollector")
            .field("total_requests", &self.total_requests.load(Ordering::Relaxed))
            .finish()
    }
}

/// Collector that discards everything.
#[derive(Debug, Default)]
pub struct NoopMetricsCollector;

impl MetricsCollector for NoopMetricsCollector {
    fn record_request(&self, _operation: &str, _success: bool, _duration: Duration) {}

    fn record_error(&self, _error_kind: &str) {}

    fn get_metrics(&self) -> RequestMetrics {
        RequestMetrics::default()
    }

    fn reset(&self) {}
}
