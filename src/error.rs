//! HTTP-facing error type.
//!
//! Every handler returns [`AppError`] on failure; it renders as
//!
//! ```json
//! { "error": { "code": "conflict", "message": "...", "details": { ... } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::application::services::AliasError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Unavailable { message: String, details: Value },
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
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
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

    /// HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts into the serializable payload.
    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Unavailable { message, details } => {
                ("service_unavailable", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::bad_request("Invalid request", json!(errors))
    }
}

impl From<AliasError> for AppError {
    fn from(e: AliasError) -> Self {
        match e {
            AliasError::InvalidRequest(reason) => {
                AppError::bad_request("Invalid request", json!({ "reason": reason }))
            }
            AliasError::AliasConflict(alias) => {
                AppError::conflict("Alias already exists", json!({ "alias": alias }))
            }
            AliasError::UrlAlreadyExists(url) => {
                AppError::conflict("URL already exists", json!({ "url": url }))
            }
            AliasError::AliasNotFound(alias) => {
                AppError::not_found("Alias not found", json!({ "alias": alias }))
            }
            AliasError::AliasGenerationExhausted(attempts) => AppError::unavailable(
                "Failed to generate a free alias",
                json!({ "attempts": attempts }),
            ),
            AliasError::Storage(source) => {
                tracing::error!(error = %source, "storage failure");
                AppError::internal("Storage error", json!({}))
            }
        }
    }
}
