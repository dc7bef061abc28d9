//! Xtreme API client.
//!
//! Provides the main client interface for interacting with the Xtreme API.

use std::sync::Arc;

use crate::auth::{AuthProvider, BearerTokenAuth, NoAuth};
use crate::config::{XtremeConfig, XtremeConfigBuilder};
use crate::errors::{XtremeError, XtremeResult};
use crate::observability::{
    DefaultMetricsCollector, LogConfig, MetricsCollector, Observability, ObservabilityConfig,
};
use crate::services::AssignmentsService;
use crate::transport::{HttpTransport, HttpTransportImpl};

/// The main Xtreme client.
///
/// # Example
///
/// ```rust,no_run
/// use xtreme_client::XtremeClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = XtremeClient::builder()
///         .base_url("https://xtreme.example.com")
///         .token("my-session-token")
///         .build()?;
///
///     let response = client.assignments().check_access(7, 2).await?;
///     let allowed: bool = response.json()?;
///     println!("allowed: {}", allowed);
///     Ok(())
/// }
/// ```
pub struct XtremeClient {
    config: XtremeConfig,
    assignments_service: AssignmentsService,
    observability: Arc<Observability>,
}

impl XtremeClient {
    /// Creates a new client builder.
    pub fn builder() -> XtremeClientBuilder {
        XtremeClientBuilder::new()
    }

    /// Creates a client from environment variables.
    ///
    /// Reads `XTREME_BASE_URL` and optionally `XTREME_TOKEN` and
    /// `XTREME_TIMEOUT`.
    pub fn from_env() -> XtremeResult<Self> {
        let config = XtremeConfig::from_env()?;
        XtremeClientBuilder::from_config(config).build()
    }

    /// Returns the assignments service.
    pub fn assignments(&self) -> &AssignmentsService {
        &self.assignments_service
    }

    /// Returns the configuration.
    pub fn config(&self) -> &XtremeConfig {
        &self.config
    }

    /// Returns the observability facade.
    pub fn observability(&self) -> &Observability {
        &self.observability
    }
}

impl std::fmt::Debug for XtremeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XtremeClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for the Xtreme client.
pub struct XtremeClientBuilder {
    config_builder: XtremeConfigBuilder,
    config: Option<XtremeConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    auth: Option<Arc<dyn AuthProvider>>,
    metrics: Option<Arc<dyn MetricsCollector>>,
    log_config: LogConfig,
    enable_metrics: bool,
}

impl XtremeClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            config_builder: XtremeConfigBuilder::new(),
            config: None,
            transport: None,
            auth: None,
            metrics: None,
            log_config: LogConfig::default(),
            enable_metrics: true,
        }
    }

    /// Creates a builder from an existing configuration.
    ///
    /// Connection settings on the builder are ignored in favour of `config`.
    pub fn from_config(config: XtremeConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::new()
        }
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(base_url);
        self
    }

    /// Sets the session token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.token(token);
        self
    }

    /// Sets the session token from an environment variable.
    pub fn token_from_env(mut self, var_name: &str) -> XtremeResult<Self> {
        self.config_builder = self.config_builder.token_from_env(var_name)?;
        Ok(self)
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config_builder = self.config_builder.timeout_secs(secs);
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.header(name, value);
        self
    }

    /// Sets a custom transport.
    ///
    /// A custom transport owns base URL joining and auth; the configured
    /// token and headers are not applied to it.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom auth provider for the default transport.
    pub fn auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets a custom metrics collector.
    pub fn metrics(mut self, metrics: Arc<dyn MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Disables metrics collection.
    pub fn disable_metrics(mut self) -> Self {
        self.enable_metrics = false;
        self
    }

    /// Sets the log configuration.
    pub fn log_config(mut self, config: LogConfig) -> Self {
        self.log_config = config;
        self
    }

    /// Builds the client.
    pub fn build(self) -> XtremeResult<XtremeClient> {
        let config = match self.config {
            Some(config) => config,
            None => self.config_builder.build()?,
        };

        // Create auth provider
        let auth: Arc<dyn AuthProvider> = match (self.auth, config.token()) {
            (Some(a), _) => a,
            (None, Some(token)) => Arc::new(BearerTokenAuth::new(token.clone())),
            (None, None) => Arc::new(NoAuth),
        };
        auth.validate()?;

        // Create transport
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                HttpTransportImpl::new(&config.base_url, config.timeout, auth)
                    .map_err(|e| XtremeError::configuration(e.to_string()))?
                    .with_default_headers(config.custom_headers.clone())
                    .with_log_config(self.log_config.clone()),
            ),
        };

        // Create observability
        let metrics: Arc<dyn MetricsCollector> = self
            .metrics
            .unwrap_or_else(|| Arc::new(DefaultMetricsCollector::new()));
        let observability = Arc::new(Observability::with_metrics(
            metrics,
            ObservabilityConfig {
                logging: self.log_config,
                enable_metrics: self.enable_metrics,
            },
        ));

        let assignments_service = AssignmentsService::new(transport, Arc::clone(&observability));

        tracing::debug!(
            base_url = %config.base_url,
            has_token = config.has_token(),
            "Xtreme client initialized"
        );

        Ok(XtremeClient {
            config,
            assignments_service,
            observability,
        })
    }
}

impl Default for XtremeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
