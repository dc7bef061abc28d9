//! Configuration module for the Xtreme client.
//!
//! Holds the server base URL, the optional session token, the request
//! timeout, and extra headers sent with every request.

use secrecy::SecretString;
use std::time::Duration;
use url::Url;

use crate::auth::secret_hint;
use crate::errors::{XtremeError, XtremeResult};

/// Default request timeout (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Xtreme client.
#[derive(Clone)]
pub struct XtremeConfig {
    /// Session token for authentication (stored securely).
    pub(crate) token: Option<SecretString>,
    /// Base URL for API requests, without a trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Custom headers to include in requests.
    pub custom_headers: Vec<(String, String)>,
}

impl XtremeConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> XtremeConfigBuilder {
        XtremeConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `XTREME_BASE_URL` (required): Server base URL
    /// - `XTREME_TOKEN` (optional): Session token
    /// - `XTREME_TIMEOUT` (optional): Request timeout in seconds
    pub fn from_env() -> XtremeResult<Self> {
        let base_url = std::env::var("XTREME_BASE_URL")
            .map_err(|_| XtremeError::configuration("XTREME_BASE_URL environment variable not set"))?;

        let mut builder = XtremeConfigBuilder::new().base_url(base_url);

        if let Ok(token) = std::env::var("XTREME_TOKEN") {
            builder = builder.token(token);
        }

        if let Ok(timeout_str) = std::env::var("XTREME_TIMEOUT") {
            if let Ok(timeout_secs) = timeout_str.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(timeout_secs));
            }
        }

        builder.build()
    }

    /// Returns the session token, if one is configured.
    pub(crate) fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    /// Returns true if a token is configured.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the token hint (last 4 characters) for debugging.
    pub fn token_hint(&self) -> Option<String> {
        self.token.as_ref().map(secret_hint)
    }
}

impl std::fmt::Debug for XtremeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XtremeConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("custom_headers", &self.custom_headers.len())
            .finish()
    }
}

/// Builder for `XtremeConfig`.
#[derive(Default)]
pub struct XtremeConfigBuilder {
    token: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    custom_headers: Vec<(String, String)>,
}

impl XtremeConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the session token from an environment variable.
    pub fn token_from_env(mut self, var_name: &str) -> XtremeResult<Self> {
        let token = std::env::var(var_name).map_err(|_| {
            XtremeError::configuration(format!("Environment variable {} not set", var_name))
        })?;
        self.token = Some(token);
        Ok(self)
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Adds a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> XtremeResult<XtremeConfig> {
        let base_url = self
            .base_url
            .ok_or_else(|| XtremeError::configuration("Base URL is required"))?;

        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(XtremeError::configuration(format!(
                "Unsupported URL scheme: {}",
                parsed.scheme()
            )));
        }
        if parsed.scheme() == "http" {
            tracing::warn!(base_url = %base_url, "Base URL does not use HTTPS");
        }

        let token = match self.token {
            Some(token) if token.trim().is_empty() => {
                return Err(XtremeError::configuration("Token cannot be empty"));
            }
            Some(token) => Some(SecretString::new(token)),
            None => None,
        };

        Ok(XtremeConfig {
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            custom_headers: self.custom_headers,
        })
    }
}
