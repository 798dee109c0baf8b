use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use fomo_core::contact::{NETWORK_MESSAGE, REJECTED_MESSAGE};
use fomo_core::error::CoreError;
use fomo_relay::RelayError;
use serde_json::json;

use crate::views::{NotFoundTemplate, Shell};

/// Application-level error type for JSON API handlers.
///
/// Wraps [`CoreError`] for domain errors and [`RelayError`] for contact
/// delivery failures. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fomo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The form relay could not take the submission.
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// A request body that could not be read into the expected shape.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Relay errors ---
            // Failures are logged with their submission id by the contact
            // handler; only the user-facing message is returned here.
            AppError::Relay(RelayError::Rejected(_)) => (
                StatusCode::BAD_GATEWAY,
                "RELAY_REJECTED",
                REJECTED_MESSAGE.to_string(),
            ),
            AppError::Relay(RelayError::Network(_) | RelayError::Unreadable(_)) => (
                StatusCode::BAD_GATEWAY,
                "RELAY_UNAVAILABLE",
                NETWORK_MESSAGE.to_string(),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// HTML page errors
// ---------------------------------------------------------------------------

/// Error type for HTML page handlers.
///
/// Missing records render the not-found page inside the site shell,
/// validation failures a bare 400 page, and template failures a bare 500
/// page without details.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

/// Convenience type alias for page handler return values.
pub type PageResult<T> = Result<T, PageError>;

const BAD_REQUEST_PAGE: &str = "<!doctype html><title>Bad request</title><h1>Bad request</h1>";

const INTERNAL_ERROR_PAGE: &str =
    "<!doctype html><title>Error</title><h1>Something went wrong</h1>";

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id = %id, "Page record not found");
                not_found_page(not_found_heading(entity))
            }
            PageError::Core(CoreError::Validation(msg)) => {
                tracing::debug!(error = %msg, "Page request failed validation");
                (StatusCode::BAD_REQUEST, Html(BAD_REQUEST_PAGE)).into_response()
            }
            PageError::Render(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
            }
        }
    }
}

/// Heading shown on the 404 page for a missing entity kind.
pub fn not_found_heading(entity: &str) -> &'static str {
    match entity {
        "CaseStudy" => "Case Study Not Found",
        _ => "Page Not Found",
    }
}

/// Render the 404 page with the given heading.
pub fn not_found_page(heading: &'static str) -> Response {
    let template = NotFoundTemplate {
        shell: Shell::new(""),
        heading,
    };
    match askama::Template::render(&template) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Not-found template rendering failed");
            (StatusCode::NOT_FOUND, heading).into_response()
        }
    }
}
