//! Request extractors with errors rendered through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections use the common error envelope.
///
/// Behaves like [`axum::Json`]: a missing or mistyped field yields 422, a
/// syntax error 400, and a missing `Content-Type: application/json` 415.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
