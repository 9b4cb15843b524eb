use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use codecamp_core::error::CoreError;
use codecamp_db::DbError;

/// Fixed body for every 5xx response; the cause is only logged.
pub const SERVER_ERROR_MESSAGE: &str = "Database error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`], making it the single place where failures
/// are turned into status codes; handlers just propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `codecamp_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository failure of any kind.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// A lookup that found nothing, answered with an empty 404.
    #[error("Not found")]
    NotFound,

    /// A bad request with a human-readable (possibly empty) message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                not_found @ CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, not_found.to_string())
                }
                CoreError::Validation(msg) | CoreError::Conflict(msg) => {
                    (StatusCode::BAD_REQUEST, msg)
                }
            },

            // --- Repository errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                server_error()
            }

            // --- HTTP-specific errors ---
            AppError::NotFound => (StatusCode::NOT_FOUND, String::new()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, message).into_response()
    }
}

fn server_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        SERVER_ERROR_MESSAGE.to_string(),
    )
}
