use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Request-scoped error taxonomy.
///
/// Every failure is reported to the caller as a structured `{"error": ...}`
/// body; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input; the caller can correct the named field and resubmit.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Persistence unavailable; the caller may retry.
    #[error("Storage error: {0}")]
    Storage(anyhow::Error),

    /// Email dispatch failed after the code was persisted. The stored code
    /// is still valid, so the caller may request a resend.
    #[error("Failed to send email: {0}")]
    Delivery(String),

    #[error("Unauthenticated: valid token required")]
    Unauthorized,

    #[error("Unauthorized: admin access required")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Delivery(_) => StatusCode::BAD_GATEWAY,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            ApiError::Storage(e) => tracing::error!(error = %e, "Storage failure"),
            ApiError::Internal(e) => tracing::error!(error = %e, "Internal failure"),
            _ => {}
        }

        let body = match &self {
            ApiError::Validation { field, message } => {
                json!({ "error": message, "field": field })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
