//! Tests for the Assignments service.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};
use xtreme_client::mocks::{fixtures, MockResponse, MockTransport};
use xtreme_client::{
    AssignDataRequest, Assignment, AssignmentQuery, HttpMethod, Page, TransportError,
    XtremeClient, XtremeError,
};

fn client_with(transport: &Arc<MockTransport>) -> XtremeClient {
    XtremeClient::builder()
        .base_url("https://xtreme.example.com")
        .transport(transport.clone())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_assign_sends_camel_case_body() {
    let transport = Arc::new(MockTransport::new());
    transport.queue(MockResponse::empty(200));
    let client = client_with(&transport);

    assert_ok!(
        client
            .assignments()
            .assign(&AssignDataRequest::new(1, 2, vec![10, 11]))
            .await
    );

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].path_and_query(), "/api/v1/assignments");
    assert_eq!(
        requests[0].body_json(),
        Some(serde_json::json!({"datasetId": 1, "userId": 2, "dataIds": [10, 11]}))
    );
}

#[tokio::test]
async fn test_assign_with_no_data_ids_still_sends_field() {
    let transport = Arc::new(MockTransport::new());
    transport.queue(MockResponse::empty(200));
    let client = client_with(&transport);

    assert_ok!(
        client
            .assignments()
            .assign(&AssignDataRequest::new(4, 5, Vec::new()))
            .await
    );

    let body = transport.last_request().unwrap().body_json().unwrap();
    assert_eq!(body, serde_json::json!({"datasetId": 4, "userId": 5, "dataIds": []}));
}

#[tokio::test]
async fn test_list_returns_raw_page() {
    let transport = Arc::new(MockTransport::new());
    transport.queue_json(&fixtures::assignment_page(1, 2, &[10, 11, 12]));
    let client = client_with(&transport);

    let response = client
        .assignments()
        .list(&AssignmentQuery::new().dataset_id(1).user_id(2))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(
        transport.last_request().unwrap().query.as_deref(),
        Some("datasetId=1&userId=2")
    );

    let page: Page<Assignment> = response.json().unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(
        page.list.iter().filter_map(|a| a.data_id).collect::<Vec<_>>(),
        vec![10, 11, 12]
    );
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_list_with_only_dataset_has_no_other_params() {
    let transport = Arc::new(MockTransport::new());
    transport.queue_json(&fixtures::assignment_page(1, 2, &[]));
    let client = client_with(&transport);

    client
        .assignments()
        .list(&AssignmentQuery::new().dataset_id(1))
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.path_and_query(), "/api/v1/assignments?datasetId=1");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_remove_addresses_resource_path() {
    let transport = Arc::new(MockTransport::new());
    transport.queue(MockResponse::empty(204));
    let client = client_with(&transport);

    let response = client.assignments().remove(5).await.unwrap();

    assert_eq!(response.status, 204);
    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.path_and_query(), "/api/v1/assignments/5");
}

#[tokio::test]
async fn test_check_access_uses_path_and_query() {
    let transport = Arc::new(MockTransport::new());
    transport.queue_json(&false);
    let client = client_with(&transport);

    let response = client.assignments().check_access(7, 2).await.unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.path_and_query(), "/api/v1/assignments/access/7?userId=2");
    assert!(!response.json::<bool>().unwrap());
}

#[tokio::test]
async fn test_response_body_is_untouched() {
    let payload = r#"{"code":"OK","data":{"allowed":true},"extra":[1,2,3]}"#;
    let transport = Arc::new(MockTransport::new());
    transport.queue(MockResponse::raw(200, payload).with_header("x-request-id", "req-1"));
    let client = client_with(&transport);

    let response = client.assignments().check_access(1, 1).await.unwrap();

    assert_eq!(response.text(), payload);
    assert_eq!(response.headers.get("x-request-id").map(String::as_str), Some("req-1"));
}

#[tokio::test]
async fn test_server_rejection_surfaces_status_and_body() {
    let transport = Arc::new(MockTransport::new());
    transport.queue(MockResponse::raw(403, r#"{"message":"forbidden"}"#));
    let client = client_with(&transport);

    let err = assert_err!(client.assignments().remove(9).await);

    assert_eq!(err.status(), Some(403));
    match err {
        XtremeError::Transport(TransportError::Status { body, .. }) => {
            assert_eq!(body, r#"{"message":"forbidden"}"#);
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_failure_surfaces_unmodified() {
    let transport = Arc::new(MockTransport::new());
    transport.queue_failure(TransportError::Connection {
        message: "connection refused".to_string(),
    });
    let client = client_with(&transport);

    let err = assert_err!(client.assignments().list(&AssignmentQuery::new()).await);

    assert_eq!(err.to_string(), "Connection error: connection refused");
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let transport = Arc::new(MockTransport::new());
    transport.set_default(MockResponse::json(&true));
    let client = Arc::new(client_with(&transport));

    let handles: Vec<_> = (1..=8u64)
        .map(|data_id| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.assignments().check_access(data_id, 2).await })
        })
        .collect();

    for handle in handles {
        assert_ok!(handle.await.unwrap());
    }

    let mut paths: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| r.path_and_query())
        .collect();
    paths.sort();
    assert_eq!(paths.len(), 8);
    assert_eq!(paths[0], "/api/v1/assignments/access/1?userId=2");
    assert_eq!(client.observability().metrics().get_metrics().operation_count("check_access"), 8);
}
