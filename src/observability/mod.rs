//! Observability module for the Xtreme client.
//!
//! Provides tracing, metrics, and logging support for monitoring
//! API requests.

mod logging;
mod metrics;

pub use logging::{log_request, log_response, redact, LogConfig, LogFormat, LogLevel};
pub use metrics::{DefaultMetricsCollector, MetricsCollector, NoopMetricsCollector, RequestMetrics};

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Logging configuration.
    pub logging: LogConfig,
    /// Enable metrics collection.
    pub enable_metrics: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            logging: LogConfig::default(),
            enable_metrics: true,
        }
    }
}

/// Observability facade for instrumenting operations.
pub struct Observability {
    metrics: Arc<dyn MetricsCollector>,
    config: ObservabilityConfig,
}

impl Observability {
    /// Creates a new observability facade.
    pub fn new(config: ObservabilityConfig) -> Self {
        Self::with_metrics(Arc::new(DefaultMetricsCollector::new()), config)
    }

    /// Creates with a custom metrics collector.
    pub fn with_metrics(metrics: Arc<dyn MetricsCollector>, config: ObservabilityConfig) -> Self {
        Self { metrics, config }
    }

    /// Returns the metrics collector.
    pub fn metrics(&self) -> &Arc<dyn MetricsCollector> {
        &self.metrics
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ObservabilityConfig {
        &self.config
    }

    /// Records a successful request.
    pub fn record_success(&self, operation: &str, duration: Duration) {
        if self.config.enable_metrics {
            self.metrics.record_request(operation, true, duration);
        }
    }

    /// Records a failed request.
    pub fn record_failure(&self, operation: &str, duration: Duration, error_kind: &str) {
        if self.config.enable_metrics {
            self.metrics.record_request(operation, false, duration);
            self.metrics.record_error(error_kind);
        }
    }
}

impl Default for Observability {
    fn default() -> Self {
        Self::new(ObservabilityConfig::default())
    }
}

impl std::fmt::Debug for Observability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observability")
            .field("config", &self.config)
            .finish()
    }
}

/// Request timer for measuring operation duration.
pub struct RequestTimer {
    start: Instant,
    operation: &'static str,
}

impl RequestTimer {
    /// Starts a timer for an operation.
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Returns the elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns the operation name.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}
