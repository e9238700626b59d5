//! Transport behaviour against a live mock backend.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};
use synergysphere::auth::{MemoryTokenStore, NoToken, StaticToken};
use synergysphere::ApiResponse;

mod common;
use common::MockResponse;

#[tokio::test]
async fn test_success_returns_parsed_body() {
    let (addr, _) = common::start_mock_backend(MockResponse::json(200, json!({"id": "p1"}))).await;
    let client = common::client(addr, Arc::new(NoToken));

    let response: ApiResponse<Value> = client.get("/api/projects/p1", &()).await;

    assert!(response.success);
    assert_eq!(response.data, Some(json!({"id": "p1"})));
    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_not_found_uses_server_message() {
    let (addr, _) =
        common::start_mock_backend(MockResponse::json(404, json!({"message": "Not found"}))).await;
    let client = common::client(addr, Arc::new(NoToken));

    let response: ApiResponse<Value> = client.get("/api/projects/missing", &()).await;

    assert_eq!(response, ApiResponse::err("Not found"));
}

#[tokio::test]
async fn test_text_error_body_used_verbatim() {
    let (addr, _) = common::start_mock_backend(MockResponse::text(502, "upstream down")).await;
    let client = common::client(addr, Arc::new(NoToken));

    let response: ApiResponse<Value> = client.get("/api/tasks", &()).await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("upstream down"));
}

#[tokio::test]
async fn test_empty_error_body_reports_status() {
    let (addr, _) = common::start_mock_backend(MockResponse::empty(500)).await;
    let client = common::client(addr, Arc::new(NoToken));

    let response: ApiResponse<Value> = client.get("/api/tasks", &()).await;

    assert_eq!(response.error.as_deref(), Some("HTTP Error: 500"));
}

#[tokio::test]
async fn test_network_failure_is_an_envelope() {
    let addr = common::refused_addr().await;
    let client = common::client(addr, Arc::new(NoToken));

    let response: ApiResponse<Value> = client.get("/health", &()).await;

    assert!(!response.success);
    assert!(response.data.is_none());
    let error = response.error.unwrap();
    assert!(error.starts_with("Network error"), "got: {error}");
}

#[tokio::test]
async fn test_malformed_json_on_success_is_reported() {
    let (addr, _) = common::start_mock_backend(MockResponse::raw_json(200, "{\"id\": ")).await;
    let client = common::client(addr, Arc::new(NoToken));

    let response: ApiResponse<Value> = client.get("/api/projects", &()).await;

    assert!(!response.success);
    assert!(response.error.unwrap().starts_with("Invalid response body"));
}

#[tokio::test]
async fn test_non_json_success_read_as_text() {
    let (addr, _) = common::start_mock_backend(MockResponse::text(200, "pong")).await;
    let client = common::client(addr, Arc::new(NoToken));

    let response: ApiResponse<String> = client.get("/ping", &()).await;

    assert_eq!(response.data.as_deref(), Some("pong"));
}

#[tokio::test]
async fn test_bearer_token_attached_when_present() {
    let (addr, requests) = common::start_mock_backend(MockResponse::json(200, json!({}))).await;
    let client = common::client(addr, Arc::new(StaticToken::new("jwt-123")));

    let _: ApiResponse<Value> = client.get("/api/auth/me", &()).await;

    let request = common::only_request(&requests);
    assert_eq!(request.header("authorization"), Some("Bearer jwt-123"));
    assert_eq!(request.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_no_authorization_without_token() {
    let (addr, requests) = common::start_mock_backend(MockResponse::json(200, json!({}))).await;
    let client = common::client(addr, Arc::new(NoToken));

    let _: ApiResponse<Value> = client.get("/api/auth/me", &()).await;

    let request = common::only_request(&requests);
    assert!(request.header("authorization").is_none());
}

#[tokio::test]
async fn test_token_read_on_every_request() {
    let (addr, requests) = common::start_mock_backend(MockResponse::json(200, json!({}))).await;
    let tokens = Arc::new(MemoryTokenStore::new());
    let client = common::client(addr, tokens.clone());

    let _: ApiResponse<Value> = client.get("/api/tasks", &()).await;
    tokens.set("fresh");
    let _: ApiResponse<Value> = client.get("/api/tasks", &()).await;

    let requests = requests.lock().unwrap();
    assert!(requests[0].header("authorization").is_none());
    assert_eq!(requests[1].header("authorization"), Some("Bearer fresh"));
}

#[tokio::test]
async fn test_query_skips_absent_values() {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Filter {
        project_id: Option<&'static str>,
        search: Option<&'static str>,
        page: Option<u32>,
    }

    let (addr, requests) = common::start_mock_backend(MockResponse::json(200, json!([]))).await;
    let client = common::client(addr, Arc::new(NoToken));

    let filter = Filter {
        project_id: Some("p 1"),
        search: None,
        page: Some(3),
    };
    let _: ApiResponse<Value> = client.get("/api/tasks", &filter).await;

    let request = common::only_request(&requests);
    assert_eq!(request.path, "/api/tasks");
    assert_eq!(request.query.len(), 2);
    assert_eq!(request.query_value("projectId"), Some("p 1"));
    assert_eq!(request.query_value("page"), Some("3"));
    assert!(request.query_value("search").is_none());
}

#[tokio::test]
async fn test_body_serialized_as_json() {
    let (addr, requests) = common::start_mock_backend(MockResponse::json(201, json!({"ok": true}))).await;
    let client = common::client(addr, Arc::new(NoToken));

    let response: ApiResponse<Value> = client.post("/api/messages", &json!({"content": "hi"})).await;

    assert!(response.success);
    let request = common::only_request(&requests);
    assert_eq!(request.method, "POST");
    assert_eq!(request.json(), json!({"content": "hi"}));
}

#[tokio::test]
async fn test_delete_with_no_content() {
    let (addr, requests) = common::start_mock_backend(MockResponse::empty(204)).await;
    let client = common::client(addr, Arc::new(NoToken));

    let response: ApiResponse<Value> = client.delete("/api/tasks/t1").await;

    assert!(response.success);
    let request = common::only_request(&requests);
    assert_eq!(request.method, "DELETE");
    assert!(request.body.is_empty());
}
