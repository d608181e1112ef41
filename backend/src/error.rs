//! # Centralized Error Handling
//!
//! This module defines the single application error type [`ApiError`] used
//! across the backend. It follows the `thiserror` pattern for ergonomic error
//! handling.
//!
//! The API recognizes exactly one error kind: an application-level
//! validation/processing error. It always renders as HTTP 400 with a JSON
//! body `{"error": "<message>"}`. Unexpected failures during task creation
//! (e.g. a malformed request body) are replaced with a fixed generic message;
//! the original cause is logged server-side and never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use thiserror::Error;

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Generic message for unexpected failures during request processing.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// The single application error kind.
///
/// Carries the message surfaced to the client. The `#[error]` attribute from
/// `thiserror` provides the `Display` implementation.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ApiError(pub String);

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The error raised in place of any unexpected failure, with the
    /// original cause discarded from the client response.
    pub fn internal() -> Self {
        Self(INTERNAL_ERROR_MESSAGE.to_string())
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
///
/// Every `ApiError` maps to 400 Bad Request with `{"error": "<message>"}`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("Client error: {}", self);

        let body = Json(ErrorResponse {
            error: self.0,
        });

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Convert `serde_json::Error` to `ApiError`.
///
/// The parse failure detail is logged, not surfaced to the client.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("JSON parse error: {}", err);
        ApiError::internal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message() {
        let err = ApiError::new("Título da tarefa é obrigatório");
        assert_eq!(err.to_string(), "Título da tarefa é obrigatório");
    }

    #[test]
    fn internal_uses_fixed_message() {
        assert_eq!(ApiError::internal().to_string(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn json_errors_collapse_to_internal() {
        let parse_err = serde_json::from_str::<shared::CreateTaskRequest>("{not json")
            .unwrap_err();
        let err: ApiError = parse_err.into();
        assert_eq!(err.to_string(), INTERNAL_ERROR_MESSAGE);
    }
}
