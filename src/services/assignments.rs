//! Assignments service.

use std::sync::Arc;
use tracing::instrument;

use crate::errors::{XtremeError, XtremeResult};
use crate::observability::{Observability, RequestTimer};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::types::assignments::{AccessQuery, AssignDataRequest, AssignmentQuery};

/// Base path of the assignment resource.
pub const ASSIGNMENTS_PATH: &str = "/api/v1/assignments";

/// Assignments service for handing data items to labelers.
///
/// Every call issues exactly one request and returns the response as the
/// transport delivered it. Validation, retries, and paging are left to the
/// server and the caller.
pub struct AssignmentsService {
    transport: Arc<dyn HttpTransport>,
    observability: Arc<Observability>,
}

impl AssignmentsService {
    /// Creates a new assignments service.
    pub fn new(transport: Arc<dyn HttpTransport>, observability: Arc<Observability>) -> Self {
        Self {
            transport,
            observability,
        }
    }

    /// Assigns data items of a dataset to a user.
    ///
    /// `POST /api/v1/assignments` with the request as JSON body.
    #[instrument(skip(self, request), fields(dataset_id = request.dataset_id, user_id = request.user_id, items = request.data_ids.len()))]
    pub async fn assign(&self, request: &AssignDataRequest) -> XtremeResult<HttpResponse> {
        let http_request = HttpRequest::post(ASSIGNMENTS_PATH)
            .with_header("Accept", "application/json")
            .with_json(request)?;

        self.execute("assign", http_request).await
    }

    /// Lists assignments matching the query.
    ///
    /// `GET /api/v1/assignments` with the set filters as query parameters.
    #[instrument(skip(self, query))]
    pub async fn list(&self, query: &AssignmentQuery) -> XtremeResult<HttpResponse> {
        let http_request = HttpRequest::get(ASSIGNMENTS_PATH)
            .with_header("Accept", "application/json")
            .with_query(query)?;

        self.execute("list", http_request).await
    }

    /// Removes an assignment.
    ///
    /// `DELETE /api/v1/assignments/{assignment_id}`.
    #[instrument(skip(self))]
    pub async fn remove(&self, assignment_id: u64) -> XtremeResult<HttpResponse> {
        let http_request = HttpRequest::delete(format!("{}/{}", ASSIGNMENTS_PATH, assignment_id))
            .with_header("Accept", "application/json");

        self.execute("remove", http_request).await
    }

    /// Asks whether a user may access a data item.
    ///
    /// `GET /api/v1/assignments/access/{data_id}?userId={user_id}`. The
    /// payload is whatever the server answers, usually a JSON boolean.
    #[instrument(skip(self))]
    pub async fn check_access(&self, data_id: u64, user_id: u64) -> XtremeResult<HttpResponse> {
        let http_request = HttpRequest::get(format!("{}/access/{}", ASSIGNMENTS_PATH, data_id))
            .with_header("Accept", "application/json")
            .with_query(&AccessQuery { user_id })?;

        self.execute("check_access", http_request).await
    }

    async fn execute(
        &self,
        operation: &'static str,
        request: HttpRequest,
    ) -> XtremeResult<HttpResponse> {
        let timer = RequestTimer::start(operation);
        let result = self.transport.send(request).await.map_err(XtremeError::from);

        match &result {
            Ok(response) => {
                tracing::debug!(operation, status = response.status, "Assignment request succeeded");
                self.observability.record_success(operation, timer.elapsed());
            }
            Err(e) => {
                tracing::warn!(operation, error = %e, "Assignment request failed");
                self.observability
                    .record_failure(operation, timer.elapsed(), e.kind());
            }
        }

        result
    }
}

impl std::fmt::Debug for AssignmentsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssignmentsService").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockResponse, MockTransport};
    use crate::transport::{HttpMethod, TransportError};
    use std::time::Duration;
    use test_case::test_case;

    fn service() -> (AssignmentsService, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::new());
        transport.set_default(MockResponse::json(&serde_json::json!(true)));
        let service = AssignmentsService::new(transport.clone(), Arc::new(Observability::default()));
        (service, transport)
    }

    #[tokio::test]
    async fn test_assign_builds_post() {
        let (service, transport) = service();

        service
            .assign(&AssignDataRequest::new(1, 2, vec![10, 11]))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/api/v1/assignments");
        assert_eq!(request.query, None);
        assert_eq!(
            request.body_json(),
            Some(serde_json::json!({"datasetId": 1, "userId": 2, "dataIds": [10, 11]}))
        );
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test_case(AssignmentQuery::new(), None ; "no filters")]
    #[test_case(AssignmentQuery::new().dataset_id(1), Some("datasetId=1") ; "dataset only")]
    #[test_case(AssignmentQuery::new().user_id(2).page_no(1).page_size(10), Some("userId=2&pageNo=1&pageSize=10") ; "user with paging")]
    #[test_case(AssignmentQuery::new().status("DONE"), Some("status=DONE") ; "status only")]
    #[tokio::test]
    async fn test_list_query(query: AssignmentQuery, expected: Option<&str>) {
        let (service, transport) = service();

        service.list(&query).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/api/v1/assignments");
        assert_eq!(request.query.as_deref(), expected);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_remove_builds_delete() {
        let (service, transport) = service();

        service.remove(5).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/api/v1/assignments/5");
        assert_eq!(request.query, None);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_check_access_builds_get() {
        let (service, transport) = service();

        let response = service.check_access(7, 2).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path_and_query(), "/api/v1/assignments/access/7?userId=2");
        assert!(response.json::<bool>().unwrap());
    }

    #[tokio::test]
    async fn test_each_call_sends_one_request() {
        let (service, transport) = service();

        service.assign(&AssignDataRequest::new(1, 1, vec![1])).await.unwrap();
        service.list(&AssignmentQuery::new()).await.unwrap();
        service.remove(1).await.unwrap();
        service.check_access(1, 1).await.unwrap();

        assert_eq!(transport.request_count(), 4);
    }

    #[tokio::test]
    async fn test_status_error_passes_through() {
        let (service, transport) = service();
        transport.queue(MockResponse::raw(409, r#"{"code":"DATA_ALREADY_ASSIGNED"}"#));

        let err = service
            .assign(&AssignDataRequest::new(1, 2, vec![10]))
            .await
            .unwrap_err();

        match err {
            XtremeError::Transport(TransportError::Status { status, body }) => {
                assert_eq!(status, 409);
                assert_eq!(body, r#"{"code":"DATA_ALREADY_ASSIGNED"}"#);
            }
            other => panic!("Expected status error, got {:?}", other),
        }
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_retried() {
        let (service, transport) = service();
        transport.queue_failure(TransportError::Timeout {
            timeout: Duration::from_secs(1),
        });

        let err = service.remove(3).await.unwrap_err();

        assert!(matches!(
            err,
            XtremeError::Transport(TransportError::Timeout { .. })
        ));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_metrics_recorded_per_operation() {
        let transport = Arc::new(MockTransport::new());
        transport.set_default(MockResponse::json(&serde_json::json!({})));
        let observability = Arc::new(Observability::default());
        let service = AssignmentsService::new(transport.clone(), Arc::clone(&observability));

        service.list(&AssignmentQuery::new()).await.unwrap();
        service.list(&AssignmentQuery::new()).await.unwrap();
        transport.queue(MockResponse::raw(500, "boom"));
        let _ = service.remove(1).await;

        let metrics = observability.metrics().get_metrics();
        assert_eq!(metrics.operation_count("list"), 2);
        assert_eq!(metrics.operation_count("remove"), 1);
        assert_eq!(metrics.failed_requests, 1);
        assert_eq!(metrics.errors.get("status"), Some(&1));
    }
}
