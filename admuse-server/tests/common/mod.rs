#![allow(dead_code)]

//! Test infrastructure for admuse-server API tests

use admuse_config::Config;
use admuse_server::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Create AppState for testing (template-only generator, no static dir)
pub fn create_test_state() -> AppState {
    let mut config = Config::default();
    config.server.static_dir = String::new();

    AppState::new(config)
}

/// Create AppState whose generator talks to the given mock endpoint
pub fn create_test_state_with_remote(base_url: &str) -> AppState {
    let mut config = Config::default();
    config.server.static_dir = String::new();
    config.generation.enabled = true;
    config.generation.base_url = base_url.to_string();
    config.generation.model = "test-model".to_string();
    config.generation.api_key = Some("test-key".to_string());

    AppState::new(config)
}

/// POST a JSON payload and return (status, parsed body)
pub async fn post_json(
    app: Router,
    uri: &str,
    payload: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or_default();

    (status, json)
}

/// GET a URI and return (status, parsed body)
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or_default();

    (status, json)
}
