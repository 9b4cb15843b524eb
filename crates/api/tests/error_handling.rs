//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code and plain-text body. They do NOT need an HTTP server -- they
//! call `IntoResponse` directly on `AppError` values.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use codecamp_api::error::{AppError, SERVER_ERROR_MESSAGE};
use codecamp_core::error::CoreError;
use codecamp_db::DbError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and body text.
async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with a readable message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::camp_not_found("ATL2024"));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Could not find camp with moniker of ATL2024");
}

#[tokio::test]
async fn bare_not_found_has_empty_body() {
    let (status, body) = error_to_response(AppError::NotFound).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Business conflicts and validation failures map to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn conflict_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Conflict("Moniker in use".into()));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Moniker in use");
}

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Validation("Moniker must not be empty".into()));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Moniker must not be empty");
}

#[tokio::test]
async fn empty_bad_request_has_empty_body() {
    let (status, body) = error_to_response(AppError::BadRequest(String::new())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Every server-side failure collapses to the same sanitized 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_generic_500() {
    let err = AppError::Database(DbError::Unavailable("password=hunter2".into()));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, SERVER_ERROR_MESSAGE);
}

#[tokio::test]
async fn sqlx_error_returns_generic_500() {
    let err = AppError::from(DbError::from(sqlx::Error::PoolTimedOut));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Database error");
}

// ---------------------------------------------------------------------------
// Test: `?` conversions land in the right variant
// ---------------------------------------------------------------------------

#[test]
fn core_and_db_errors_convert_via_from() {
    assert_matches!(
        AppError::from(CoreError::Validation("x".into())),
        AppError::Core(CoreError::Validation(_))
    );
    assert_matches!(
        AppError::from(DbError::Unavailable("x".into())),
        AppError::Database(DbError::Unavailable(_))
    );
}
