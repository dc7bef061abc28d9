//! HTTP transport layer for the Xtreme client.
//!
//! The transport is the generic HTTP collaborator: it joins paths onto the
//! base URL, applies authentication and default headers, and reports
//! failures. Services only describe requests.

mod http;

pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, HttpTransportImpl};

use std::time::Duration;

/// Transport error types.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection error.
    #[error("Connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Timeout error.
    #[error("Timeout after {timeout:?}")]
    Timeout {
        /// Timeout duration.
        timeout: Duration,
    },

    /// The request could not be built, e.g. a malformed header.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// Invalid response.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, lossily decoded as UTF-8.
        body: String,
    },
}

impl TransportError {
    /// Short, stable label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            TransportError::Connection { .. } => "connection",
            TransportError::Timeout { .. } => "timeout",
            TransportError::InvalidRequest { .. } => "invalid_request",
            TransportError::InvalidResponse { .. } => "invalid_response",
            TransportError::Status { .. } => "status",
        }
    }
}
