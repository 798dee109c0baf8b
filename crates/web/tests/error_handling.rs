//! Tests for `AppError` and `PageError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly; no router is involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use fomo_core::error::CoreError;
use fomo_relay::RelayError;
use fomo_web::error::{not_found_heading, AppError, PageError};
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

async fn page_to_response(err: PageError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "CaseStudy",
        id: "7".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "CaseStudy with id 7 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Please tell us your name.".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Please tell us your name.");
}

// ---------------------------------------------------------------------------
// Test: relay rejection hides the relay's reason
// ---------------------------------------------------------------------------

#[tokio::test]
async fn relay_rejection_returns_502_with_generic_message() {
    let err = AppError::Relay(RelayError::Rejected("Invalid access key".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "RELAY_REJECTED");
    assert!(!json["error"].as_str().unwrap().contains("access key"));
}

// ---------------------------------------------------------------------------
// Test: an unreadable relay reply reads as the relay being unavailable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreadable_relay_reply_returns_502_unavailable() {
    let err = AppError::Relay(RelayError::Unreadable(
        "HTTP 502 with a non-JSON body: <html>".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "RELAY_UNAVAILABLE");
    assert_eq!(json["error"], "Network error. Please try again.");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest keeps its message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_returns_400_with_message() {
    let err = AppError::BadRequest("Failed to parse the request body as JSON".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Failed to parse the request body as JSON");
}

// ---------------------------------------------------------------------------
// Test: PageError::Core(NotFound) renders the HTML 404 page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn page_not_found_renders_heading() {
    let err = PageError::Core(CoreError::NotFound {
        entity: "CaseStudy",
        id: "abc".into(),
    });

    let (status, html) = page_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Case Study Not Found"));
}

// ---------------------------------------------------------------------------
// Test: page validation failures render a bare 400 page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn page_validation_error_is_bare_400() {
    let err = PageError::Core(CoreError::Validation("unexpected field".into()));

    let (status, html) = page_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!html.contains("unexpected field"));
}

#[test]
fn not_found_heading_by_entity() {
    assert_eq!(not_found_heading("CaseStudy"), "Case Study Not Found");
    assert_eq!(not_found_heading("Page"), "Page Not Found");
}

#[test]
fn relay_and_core_errors_convert() {
    let err: AppError = RelayError::Rejected("spam".into()).into();
    assert_matches!(err, AppError::Relay(RelayError::Rejected(_)));

    let err: AppError = CoreError::Validation("Please tell us your name.".into()).into();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
}
