use crate::state::AppState;
use crate::{api, health};

use std::path::Path;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{Any, AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors.allowed_origins);
    let static_dir = state.config.server.static_dir.clone();

    let mut router = Router::new()
        // Copy generation endpoint
        .route("/api/generate-copy", post(api::copy::copy::generate_copy))
        // Health check endpoints
        .route("/api/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state);

    // Single-page client: serve assets, fall back to index.html for
    // unknown routes
    if !static_dir.is_empty() {
        let dir = Path::new(&static_dir);
        if dir.is_dir() {
            let index = dir.join("index.html");
            router = router.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)));
        } else {
            log::warn!("Static directory {} not found, serving API only", static_dir);
        }
    }

    router.layer(cors)
}

/// CORS middleware: permissive in development, restricted to the
/// configured origins otherwise
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring unparseable CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
