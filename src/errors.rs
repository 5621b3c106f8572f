use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Inbound request is missing the shared secret or carries the wrong one.
    Unauthorized,
    /// HTTP verb not part of the endpoint contract.
    MethodNotAllowed,
    /// The mapping provider answered with a non-success status or an
    /// unparseable payload. Aborts the whole batch.
    Upstream(String),
    /// Internal server error (catch-all, including malformed request bodies).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::MethodNotAllowed => write!(f, "Method not allowed"),
            AppError::Upstream(msg) => write!(f, "{}", msg),
            AppError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each error variant to an appropriate HTTP status code and a JSON
    /// body of the form `{"error": <message>}`. Upstream failures embed the
    /// provider's status and error text so the caller can see what failed.
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Unauthorized => {
                tracing::warn!("Unauthorized request rejected");
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream API error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    /// Converts a transport-level `reqwest::Error` into an `AppError`.
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}
