//! Axum extractors for optional caller identity

use crate::ApiError;
use crate::state::AppState;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Extracts the caller's user ID from the `X-User-Id` header, if any.
///
/// Identity is used only for usage accounting; copy generation itself is
/// never gated on it, so extraction cannot reject a request.
pub struct CallerId(pub Option<Uuid>);

impl FromRequestParts<AppState> for CallerId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            #[allow(clippy::collapsible_if)]
            if let Some(header_value) = parts.headers.get("X-User-Id") {
                if let Ok(user_id_str) = header_value.to_str() {
                    if let Ok(uuid) = Uuid::parse_str(user_id_str) {
                        return Ok(CallerId(Some(uuid)));
                    }
                    log::warn!("Invalid UUID in X-User-Id header: {}", user_id_str);
                }
            }

            Ok(CallerId(None))
        }
    }
}
