//! Unified error handling.
//!
//! Provides a single error type for the application and infrastructure
//! layers, with an explicit error kind -> HTTP status table for the API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub property: String,
    pub message: String,
    pub invalid_value: serde_json::Value,
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Domain errors
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("User with email \"{email}\" already exists")]
    UserAlreadyExists { email: String },

    #[error("User with id \"{id}\" not found")]
    UserNotFound { id: String },

    // Validation
    #[error("Validation failed")]
    ValidationFailed(Vec<FieldViolation>),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Failed to dispatch event {event}: {message}")]
    EventDispatch { event: String, message: String },

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    violations: Option<Vec<FieldViolation>>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidFormat(_) => "INVALID_FORMAT",
            AppError::UserAlreadyExists { .. } => "USER_ALREADY_EXISTS",
            AppError::UserNotFound { .. } => "USER_NOT_FOUND",
            AppError::ValidationFailed(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::EventDispatch { .. } => "EVENT_DISPATCH_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidFormat(_)
            | AppError::ValidationFailed(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UserAlreadyExists { .. } => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::BadRequest(msg) => msg.clone(),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::EventDispatch { event, message } => {
                tracing::error!(event = %event, "Event dispatch error: {}", message);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();
        let message = self.user_message();
        let violations = match self {
            AppError::ValidationFailed(violations) => Some(violations),
            _ => None,
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message,
                violations,
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidFormat { value } => AppError::InvalidFormat(value),
            DomainError::UserAlreadyExists { email } => AppError::UserAlreadyExists { email },
            DomainError::UserNotFound { id } => AppError::UserNotFound { id },
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn event_dispatch(event: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::EventDispatch {
            event: event.into(),
            message: message.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
