//! Application error type and its HTTP rendering.
//!
//! Every error leaves the service as
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::DomainError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input rejected by business rules (400).
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// Request body well-formed but structurally wrong: missing or mistyped fields (422).
    #[error("{message}")]
    Unprocessable { message: String, details: Value },
    /// Request body not declared as JSON (415).
    #[error("{message}")]
    UnsupportedMediaType { message: String, details: Value },
    /// Unexpected fault. Details are logged, never returned (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unprocessable(message: impl Into<String>, details: Value) -> Self {
        Self::Unprocessable {
            message: message.into(),
            details,
        }
    }
    pub fn unsupported_media_type(message: impl Into<String>, details: Value) -> Self {
        Self::UnsupportedMediaType {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its public payload.
    ///
    /// Internal errors are reduced to a generic message with empty details.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Unprocessable { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::UnsupportedMediaType { message, details } => ErrorInfo {
                code: "unsupported_media_type",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { .. } => ErrorInfo {
                code: "internal_error",
                message: "Internal server error".to_string(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, details } = &self {
            tracing::error!(%details, "Internal error: {}", message);
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(message) => AppError::bad_request(message, json!({})),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let details = json!({ "reason": rejection.body_text() });

        match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::unprocessable("Request body failed validation", details)
            }
            StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::unsupported_media_type(
                "Expected request with `Content-Type: application/json`",
                details,
            ),
            status if status.is_client_error() => {
                AppError::bad_request("Malformed request body", details)
            }
            _ => AppError::internal("Failed to read request body", details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::INVALID_BIRTH_DATE;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_domain_error_renders_as_bad_request() {
        let error: AppError = DomainError::invalid_birth_date().into();
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(json["error"]["message"], INVALID_BIRTH_DATE);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let error = AppError::internal("lock poisoned", json!({ "key": "secret" }));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "internal_error");
        assert_eq!(json["error"]["message"], "Internal server error");
        assert_eq!(json["error"]["details"], json!({}));
    }

    #[test]
    fn test_display_is_message() {
        let error = AppError::unprocessable("Request body failed validation", json!({}));
        assert_eq!(error.to_string(), "Request body failed validation");

        let error = AppError::internal("lock poisoned", json!({}));
        assert_eq!(error.to_string(), "lock poisoned");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::unprocessable("x", json!({})).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::unsupported_media_type("x", json!({})).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }
}
