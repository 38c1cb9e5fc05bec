//! Copy-generation REST API handler

use crate::state::AppState;
use crate::{ApiResult, CallerId, GenerateCopyResponse};

use admuse_core::{CopyRequest, CoreError};

use axum::{Json, extract::State};
use serde_json::Value;

/// POST /api/generate-copy
///
/// Validates the raw payload, then produces copy through the generator.
/// Generation itself cannot fail: remote errors are absorbed by the
/// template fallback, so the only rejections here are validation ones.
pub async fn generate_copy(
    State(state): State<AppState>,
    caller: CallerId,
    Json(payload): Json<Value>,
) -> ApiResult<Json<GenerateCopyResponse>> {
    let request = match CopyRequest::from_payload(&payload) {
        Ok(request) => request,
        Err(e) => {
            state.metrics.validation_failed(match &e {
                CoreError::InvalidProduct { .. } => "product",
                CoreError::UnknownMascot { .. } => "mascot",
            });
            return Err(e.into());
        }
    };

    match caller.0 {
        Some(user_id) => log::debug!(
            "Generating {} copy for user {}",
            request.mascot,
            user_id
        ),
        None => log::debug!("Generating {} copy for anonymous caller", request.mascot),
    }

    let (copy, source) = state
        .generator
        .generate(request.mascot, &request.product)
        .await;

    state.metrics.copy_generated(source);
    log::info!("Generated copy: mascot={}, powered_by={}", request.mascot, source);

    Ok(Json(GenerateCopyResponse {
        copy: copy.into(),
        powered_by: source,
    }))
}
