//! HTTP transport implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::instrument;

use super::TransportError;
use crate::auth::AuthProvider;
use crate::errors::XtremeResult;
use crate::observability::{log_request, log_response, LogConfig};

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// DELETE request.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// HTTP request representation.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Request path, relative to the base URL.
    pub path: String,
    /// Encoded query string without the leading `?`.
    pub query: Option<String>,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Option<Vec<u8>>,
    /// Request timeout override.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Creates a new GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a new POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a new DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Sets the request body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `value` as the JSON body and sets the content type.
    pub fn with_json<T: Serialize + ?Sized>(self, value: &T) -> XtremeResult<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(self
            .with_header("Content-Type", "application/json")
            .with_body(body))
    }

    /// Encodes `params` as the query string.
    ///
    /// `None` fields are expected to be skipped by the serializer; an empty
    /// result leaves the request without a query string.
    pub fn with_query<T: Serialize + ?Sized>(mut self, params: &T) -> XtremeResult<Self> {
        let encoded = serde_urlencoded::to_string(params)?;
        self.query = if encoded.is_empty() {
            None
        } else {
            Some(encoded)
        };
        Ok(self)
    }

    /// Sets a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the path with the query string appended, if any.
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

/// HTTP response representation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true if the status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> XtremeResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Turns a non-2xx response into [`TransportError::Status`].
    pub fn error_for_status(self) -> Result<Self, TransportError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TransportError::Status {
                status: self.status,
                body: self.text(),
            })
        }
    }
}

/// HTTP transport trait.
///
/// Implementations send exactly one request per call and report non-2xx
/// answers as [`TransportError::Status`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send an HTTP request.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// HTTP transport implementation using reqwest.
pub struct HttpTransportImpl {
    client: Client,
    base_url: String,
    auth: Arc<dyn AuthProvider>,
    default_headers: Vec<(String, String)>,
    timeout: Duration,
    log_config: LogConfig,
}

impl HttpTransportImpl {
    /// Creates a new HTTP transport.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        auth: Arc<dyn AuthProvider>,
    ) -> Result<Self, TransportError> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| TransportError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
            default_headers: Vec::new(),
            timeout,
            log_config: LogConfig::default(),
        })
    }

    /// Adds headers sent with every request.
    pub fn with_default_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.default_headers = headers;
        self
    }

    /// Sets the logging configuration used for request logs.
    pub fn with_log_config(mut self, log_config: LogConfig) -> Self {
        self.log_config = log_config;
        self
    }

    /// Builds the full URL for a request.
    fn build_url(&self, request: &HttpRequest) -> String {
        format!(
            "{}/{}",
            self.base_url,
            request.path_and_query().trim_start_matches('/')
        )
    }

    /// Merges default, per-request and auth headers, later sources replacing
    /// earlier ones regardless of name case.
    fn merge_headers(
        &self,
        request_headers: &HashMap<String, String>,
    ) -> Result<HeaderMap, TransportError> {
        let mut auth_headers = HashMap::new();
        self.auth.apply_auth(&mut auth_headers);

        let mut merged = HeaderMap::new();
        let sources = self
            .default_headers
            .iter()
            .map(|(name, value)| (name, value))
            .chain(request_headers.iter())
            .chain(auth_headers.iter());

        for (name, value) in sources {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                TransportError::InvalidRequest {
                    message: format!("invalid header name {name:?}: {e}"),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| TransportError::InvalidRequest {
                    message: format!("invalid value for header {name}: {e}"),
                })?;
            merged.insert(header_name, header_value);
        }

        Ok(merged)
    }

    fn map_send_error(&self, e: &reqwest::Error, timeout: Option<Duration>) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                timeout: timeout.unwrap_or(self.timeout),
            }
        } else if e.is_connect() {
            TransportError::Connection {
                message: e.to_string(),
            }
        } else {
            TransportError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl HttpTransport for HttpTransportImpl {
    #[instrument(skip(self, request), fields(method = request.method.as_str(), path = %request.path))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.build_url(&request);

        let headers = self.merge_headers(&request.headers)?;

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        }
        .headers(headers);

        log_request(
            &self.log_config,
            request.method.as_str(),
            &request.path,
            request.body.as_deref().map(String::from_utf8_lossy).as_deref(),
        );

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        if let Some(timeout) = request.timeout {
            req_builder = req_builder.timeout(timeout);
        }

        let started = Instant::now();
        let response = req_builder
            .send()
            .await
            .map_err(|e| self.map_send_error(&e, request.timeout))?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::InvalidResponse {
                message: e.to_string(),
            })?
            .to_vec();

        log_response(status, started.elapsed());

        HttpResponse {
            status,
            headers,
            body,
        }
        .error_for_status()
    }
}

/// Flattens response headers, joining repeated values with `, `.
fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    collected
}

impl std::fmt::Debug for HttpTransportImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransportImpl")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth.scheme())
            .field("timeout", &self.timeout)
            .finish()
    }
}
