//! HTTP-layer tests driven in process, without a socket.
//!
//! Router clones share the same store, so multi-request scenarios issue
//! each request against a fresh clone of one app.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_server::config::ServiceConfig;
use todo_server::http::HttpServer;
use todo_server::store::MemoryStore;

fn app() -> Router {
    HttpServer::new(ServiceConfig::default(), Arc::new(MemoryStore::new())).router()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_empty_store_returns_empty_array() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(body_json(resp).await, serde_json::json!([]));
}

// --- create ---

#[tokio::test]
async fn create_returns_201_with_assigned_id() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", r#"{"body":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo = body_json(resp).await;
    assert_eq!(todo["id"], 1);
    assert_eq!(todo["completed"], false);
    assert_eq!(todo["body"], "Buy milk");
}

#[tokio::test]
async fn create_empty_body_returns_400_and_adds_nothing() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/todos", r#"{"body":""}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"error": "Todo body is required"})
    );

    let resp = app
        .oneshot(empty_request("GET", "/api/todos"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await, serde_json::json!([]));
}

#[tokio::test]
async fn create_missing_body_field_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"error": "Todo body is required"})
    );
}

#[tokio::test]
async fn create_malformed_json_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"error": "Invalid input"})
    );
}

// --- complete ---

#[tokio::test]
async fn complete_marks_exactly_one_todo() {
    let app = app();

    for body in [r#"{"body":"A"}"#, r#"{"body":"B"}"#] {
        let resp = app
            .clone()
            .oneshot(json_request("POST", "/api/todos", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app
        .clone()
        .oneshot(empty_request("PUT", "/api/todos/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["completed"], true);

    let resp = app
        .oneshot(empty_request("GET", "/api/todos"))
        .await
        .unwrap();
    let todos = body_json(resp).await;
    assert_eq!(todos[0]["completed"], true);
    assert_eq!(todos[1]["completed"], false);
}

#[tokio::test]
async fn complete_is_idempotent() {
    let app = app();

    app.clone()
        .oneshot(json_request("POST", "/api/todos", r#"{"body":"A"}"#))
        .await
        .unwrap();

    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(empty_request("PUT", "/api/todos/1"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["completed"], true);
    }
}

#[tokio::test]
async fn complete_unknown_id_returns_404() {
    let resp = app()
        .oneshot(empty_request("PUT", "/api/todos/99"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"error": "todo not found"})
    );
}

#[tokio::test]
async fn complete_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("PUT", "/api/todos/abc"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"error": "Invalid ID"})
    );
}

// --- delete ---

#[tokio::test]
async fn delete_removes_and_returns_the_record() {
    let app = app();

    for body in [r#"{"body":"A"}"#, r#"{"body":"B"}"#] {
        app.clone()
            .oneshot(json_request("POST", "/api/todos", body))
            .await
            .unwrap();
    }

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/todos/2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted = body_json(resp).await;
    assert_eq!(deleted["id"], 2);
    assert_eq!(deleted["body"], "B");

    let resp = app
        .oneshot(empty_request("GET", "/api/todos"))
        .await
        .unwrap();
    let todos = body_json(resp).await;
    assert_eq!(todos.as_array().unwrap().len(), 1);
    assert_eq!(todos[0]["id"], 1);
}

#[tokio::test]
async fn delete_unknown_id_returns_404_and_changes_nothing() {
    let app = app();

    app.clone()
        .oneshot(json_request("POST", "/api/todos", r#"{"body":"A"}"#))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/todos/9"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"error": "todo not found"})
    );

    let resp = app
        .oneshot(empty_request("GET", "/api/todos"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/api/todos/12x"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- routing fallbacks ---

#[tokio::test]
async fn unsupported_method_on_collection_returns_405() {
    let resp = app()
        .oneshot(empty_request("PATCH", "/api/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unsupported_method_on_item_returns_405() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/todos/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unmatched_path_returns_404() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/unknown"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- middleware ---

#[tokio::test]
async fn responses_carry_a_request_id() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/todos"))
        .await
        .unwrap();

    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn oversized_body_returns_413() {
    let oversized = format!(r#"{{"body":"{}"}}"#, "x".repeat(70 * 1024));
    let request = Request::builder()
        .method("POST")
        .uri("/api/todos")
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::CONTENT_LENGTH, oversized.len())
        .body(Body::from(oversized))
        .unwrap();

    let resp = app().oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// --- admin ---

#[tokio::test]
async fn admin_status_reports_operational() {
    let resp = app()
        .oneshot(empty_request("GET", "/admin/status"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let status = body_json(resp).await;
    assert_eq!(status["status"], "operational");
    assert_eq!(status["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn admin_stats_counts_store_contents() {
    let app = app();

    for body in [r#"{"body":"A"}"#, r#"{"body":"B"}"#] {
        app.clone()
            .oneshot(json_request("POST", "/api/todos", body))
            .await
            .unwrap();
    }
    app.clone()
        .oneshot(empty_request("PUT", "/api/todos/1"))
        .await
        .unwrap();

    let resp = app
        .oneshot(empty_request("GET", "/admin/stats"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"total": 2, "completed": 1, "pending": 1})
    );
}
