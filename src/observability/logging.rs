//! Logging configuration and utilities.
//!
//! Structured logging goes through `tracing`; [`LogConfig::init`] installs a
//! `tracing-subscriber` registry for applications that do not set up their
//! own.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-field output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
    /// Single-line condensed output.
    Compact,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Log request bodies at debug level.
    pub log_request_bodies: bool,
    /// Redact sensitive data.
    pub redact_sensitive: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            log_request_bodies: false,
            redact_sensitive: true,
        }
    }
}

impl LogConfig {
    /// Creates a new log configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level.
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables request body logging.
    pub fn log_bodies(mut self) -> Self {
        self.log_request_bodies = true;
        self
    }

    /// Disables sensitive data redaction.
    pub fn no_redact(mut self) -> Self {
        self.redact_sensitive = false;
        self
    }

    /// Installs a global subscriber with this configuration.
    ///
    /// `RUST_LOG` directives are honored on top of the configured level.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from(self.level).into())
            .from_env_lossy();

        let registry = tracing_subscriber::registry().with(filter);
        match self.format {
            LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init()?,
            LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
            LogFormat::Compact => registry.with(fmt::layer().compact()).try_init()?,
        }

        Ok(())
    }
}

fn redaction_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"(?i)bearer\s+[A-Za-z0-9._~+/=-]+", "Bearer ***"),
            (r#"(?i)(token|password)"?\s*[=:]\s*"?[^\s,}&"]+"#, "$1=***"),
            (r"(?i)authorization[=:][^\s,}]+", "authorization=***"),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
        .collect()
    })
}

/// Masks bearer tokens and credential pairs in text destined for logs.
pub fn redact(text: &str) -> String {
    let mut result = text.to_string();
    for (re, replacement) in redaction_patterns() {
        result = re.replace_all(&result, *replacement).into_owned();
    }
    result
}

/// Logs an outgoing HTTP request.
///
/// The body is only included when the configuration asks for it.
pub fn log_request(config: &LogConfig, method: &str, path: &str, body: Option<&str>) {
    let body = match body {
        Some(_) if !config.log_request_bodies => "<omitted>".to_string(),
        Some(text) if config.redact_sensitive => redact(text),
        Some(text) => text.to_string(),
        None => "<empty>".to_string(),
    };
    tracing::debug!(method = method, path = path, body = %body, "Outgoing request");
}

/// Logs a received HTTP response.
pub fn log_response(status: u16, duration: Duration) {
    if (200..300).contains(&status) {
        tracing::debug!(status, duration_ms = duration.as_millis() as u64, "Response received");
    } else {
        tracing::warn!(status, duration_ms = duration.as_millis() as u64, "Non-success response");
    }
}
