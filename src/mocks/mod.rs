//! Mock implementations for testing.
//!
//! Provides a mock transport and auth provider for unit testing without
//! making real API calls.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::auth::AuthProvider;
use crate::errors::XtremeError;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Mock HTTP transport for testing.
///
/// Non-2xx mock responses are reported as [`TransportError::Status`], the
/// same way the reqwest transport reports them.
pub struct MockTransport {
    outcomes: Mutex<VecDeque<MockOutcome>>,
    requests: Mutex<Vec<RecordedRequest>>,
    default_response: Mutex<Option<MockResponse>>,
}

enum MockOutcome {
    Response(MockResponse),
    Failure(TransportError),
}

/// A recorded request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Request path.
    pub path: String,
    /// Encoded query string.
    pub query: Option<String>,
    /// Request body.
    pub body: Option<Vec<u8>>,
    /// Request headers.
    pub headers: HashMap<String, String>,
}

impl RecordedRequest {
    /// Returns the path with the query string appended, if any.
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }

    /// Parses the body as JSON.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }
}

/// A mock response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Creates a successful JSON response.
    pub fn json<T: serde::Serialize>(value: &T) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_default();
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        Self {
            status: 200,
            headers,
            body,
        }
    }

    /// Creates a response with the given status and raw body.
    pub fn raw(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Creates an empty response with the given status.
    pub fn empty(status: u16) -> Self {
        Self::raw(status, Vec::new())
    }

    /// Adds a header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            default_response: Mutex::new(None),
        }
    }

    /// Queues a response.
    pub fn queue(&self, response: MockResponse) {
        lock(&self.outcomes).push_back(MockOutcome::Response(response));
    }

    /// Queues a JSON response.
    pub fn queue_json<T: serde::Serialize>(&self, value: &T) {
        self.queue(MockResponse::json(value));
    }

    /// Queues a transport-level failure.
    pub fn queue_failure(&self, error: TransportError) {
        lock(&self.outcomes).push_back(MockOutcome::Failure(error));
    }

    /// Sets the response used once the queue is empty.
    pub fn set_default(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Gets all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Gets the last recorded request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Clears recorded requests.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    fn next_outcome(&self) -> MockOutcome {
        if let Some(outcome) = lock(&self.outcomes).pop_front() {
            return outcome;
        }
        let response = lock(&self.default_response)
            .clone()
            .unwrap_or_else(|| MockResponse::raw(500, "No mock response configured"));
        MockOutcome::Response(response)
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(RecordedRequest {
            method: request.method,
            path: request.path,
            query: request.query,
            body: request.body,
            headers: request.headers,
        });

        match self.next_outcome() {
            MockOutcome::Response(response) => HttpResponse {
                status: response.status,
                headers: response.headers,
                body: response.body,
            }
            .error_for_status(),
            MockOutcome::Failure(error) => Err(error),
        }
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("request_count", &self.request_count())
            .finish()
    }
}

/// Mock auth provider for testing.
pub struct MockAuth {
    token: String,
}

impl MockAuth {
    /// Creates a new mock auth provider.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Default for MockAuth {
    fn default() -> Self {
        Self::new("mock_session_token")
    }
}

#[async_trait]
impl AuthProvider for MockAuth {
    fn apply_auth(&self, headers: &mut HashMap<String, String>) {
        headers.insert("Authorization".to_string(), format!("Bearer {}", self.token));
    }

    fn scheme(&self) -> &str {
        "Bearer"
    }

    fn validate(&self) -> Result<(), XtremeError> {
        Ok(())
    }
}

impl std::fmt::Debug for MockAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockAuth").finish()
    }
}

/// Test fixtures for common response payloads.
pub mod fixtures {
    use serde_json::{json, Value};

    /// An assignment record.
    pub fn assignment(id: u64, dataset_id: u64, data_id: u64, user_id: u64) -> Value {
        json!({
            "id": id,
            "datasetId": dataset_id,
            "dataId": data_id,
            "userId": user_id,
            "status": "ASSIGNED"
        })
    }

    /// A single page of assignments for one user.
    pub fn assignment_page(dataset_id: u64, user_id: u64, data_ids: &[u64]) -> Value {
        let list: Vec<Value> = data_ids
            .iter()
            .enumerate()
            .map(|(i, data_id)| assignment(i as u64 + 1, dataset_id, *data_id, user_id))
            .collect();

        json!({
            "pageNo": 1,
            "pageSize": 10,
            "total": list.len(),
            "list": list
        })
    }
}
