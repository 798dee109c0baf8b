//! Request extractors whose rejections use the API error envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor for `/api/v1` handlers.
///
/// Behaves like [`axum::Json`], but a missing content type, malformed JSON or
/// a body of the wrong shape is answered with a 400 `BAD_REQUEST` envelope
/// instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
