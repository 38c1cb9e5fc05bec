use crate::state::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /api/health - Health check with generator status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let generator = if state.generator.is_remote_enabled() {
        "remote"
    } else {
        "template_only"
    };

    let health = json!({
        "message": "AdMuse API is running!",
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "generator": generator,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    // Simple check: if we can respond, we're alive
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe (ready to accept traffic?)
pub async fn readiness_check() -> Response {
    // Generation has a total fallback, so a running server is a ready one
    (StatusCode::OK, "Ready").into_response()
}
