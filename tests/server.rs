//! Demo routes driven through the axum router.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use json_response::config::{parse_config, WriterConfig};
use json_response::server::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(writer: WriterConfig) -> Router {
    build_router(AppState {
        writer: Arc::new(writer),
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn index_is_ok_envelope() {
    let (status, headers, body) = send(app(WriterConfig::default()), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["content-type"], "application/json");
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"code": 200, "message": "json-response demo"}));
}

#[tokio::test]
async fn list_passes_structure_through() {
    let (status, _, body) = send(app(WriterConfig::default()), get("/items")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body[0]["name"], "anvil");
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_item_uses_capability() {
    let (status, _, body) = send(app(WriterConfig::default()), get("/items/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"code": 404, "message": "item 42 does not exist"}));
}

#[tokio::test]
async fn upstream_error_reports_bad_gateway() {
    let (status, _, body) = send(app(WriterConfig::default()), get("/upstream")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"code": 502, "message": "upstream unavailable"}));
}

#[tokio::test]
async fn create_sets_location() {
    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"crucible"}"#))
        .unwrap();
    let (status, headers, body) = send(app(WriterConfig::default()), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers["location"], "/items/3");
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"id": 3, "name": "crucible"}));
}

#[tokio::test]
async fn create_rejects_blank_name() {
    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"  "}"#))
        .unwrap();
    let (status, _, body) = send(app(WriterConfig::default()), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"error": "name is required"}));
}

#[tokio::test]
async fn delete_is_no_content() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/items/1")
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(app(WriterConfig::default()), request).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(headers["content-type"], "application/json");
    assert!(body.is_empty());
}

#[tokio::test]
async fn job_is_accepted() {
    let request = Request::builder()
        .method("POST")
        .uri("/jobs")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(app(WriterConfig::default()), request).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"queued": true}));
}

#[tokio::test]
async fn limited_adds_retry_after() {
    let (status, headers, body) = send(app(WriterConfig::default()), get("/limited")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(headers["retry-after"], "30");
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"code": 429, "message": "slow down"}));
}

#[tokio::test]
async fn fallback_is_not_found_envelope() {
    let (status, _, body) = send(app(WriterConfig::default()), get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"code": 404, "message": "Not Found"}));
}

#[tokio::test]
async fn configured_defaults_reach_every_response() {
    let config = parse_config(
        r#"
        [writer]
        content_type = "application/json; charset=utf-8"

        [writer.default_headers]
        "Cache-Control" = "no-store"
        "#,
    )
    .unwrap();

    let (_, headers, _) = send(app(config.writer.clone()), get("/")).await;
    assert_eq!(headers["content-type"], "application/json; charset=utf-8");
    assert_eq!(headers["cache-control"], "no-store");

    let (_, headers, _) = send(app(config.writer), get("/items/99")).await;
    assert_eq!(headers["cache-control"], "no-store");
}
