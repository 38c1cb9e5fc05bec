use crate::ApiError;

use admuse_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Invalid mascot selection".into(),
        field: Some("mascot".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Invalid mascot selection");
    assert_eq!(json["error"]["field"], "mascot");
}

#[tokio::test]
async fn test_internal_error_returns_500_without_field() {
    let error = ApiError::internal("Something broke");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_invalid_product_maps_to_fixed_message() {
    let error: ApiError = CoreError::invalid_product().into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["message"], "Invalid product data");
    assert_eq!(json["error"]["field"], "product");
}

#[tokio::test]
async fn test_unknown_mascot_maps_to_fixed_message() {
    // The rejected value must not leak into the client-facing message
    let error: ApiError = CoreError::unknown_mascot("<script>").into();
    let response = error.into_response();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["message"], "Invalid mascot selection");
    assert_eq!(json["error"]["field"], "mascot");
}
