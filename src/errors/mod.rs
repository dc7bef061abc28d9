//! Error types for the Xtreme client.
//!
//! The assignment API defines no error taxonomy of its own. Transport
//! failures pass through [`XtremeError::Transport`] untouched; the remaining
//! variants cover what happens on the client side before a request leaves
//! or after the caller asks for a typed body.

use thiserror::Error;

use crate::transport::TransportError;

/// Result type alias for Xtreme operations.
pub type XtremeResult<T> = Result<T, XtremeError>;

/// Error type for Xtreme client operations.
#[derive(Debug, Error)]
pub enum XtremeError {
    /// Configuration error (missing base URL, bad scheme, etc.)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },

    /// Failure reported by the transport, passed through unmodified.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl XtremeError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        XtremeError::Configuration {
            message: message.into(),
        }
    }

    /// Returns the transport error, if this is one.
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            XtremeError::Transport(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status of a non-2xx response, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self.as_transport()? {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short, stable label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            XtremeError::Configuration { .. } => "configuration",
            XtremeError::Serialization { .. } => "serialization",
            XtremeError::Transport(e) => e.kind(),
        }
    }
}

impl From<serde_json::Error> for XtremeError {
    fn from(err: serde_json::Error) -> Self {
        XtremeError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_urlencoded::ser::Error> for XtremeError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        XtremeError::Serialization {
            message: format!("Failed to encode query: {}", err),
        }
    }
}

impl From<url::ParseError> for XtremeError {
    fn from(err: url::ParseError) -> Self {
        XtremeError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}
