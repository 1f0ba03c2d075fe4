//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use crm_auth::AuthError;
use crm_core::CoreError;
use crm_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this error concerns a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed field value (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Duplicate email/phone (409)
    #[error("Duplicate: {message} {location}")]
    Duplicate {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Weak or mismatched password (400)
    #[error("Password rejected: {message} {location}")]
    PasswordPolicy {
        message: String,
        location: ErrorLocation,
    },

    /// Bad credentials at login (401). Never says which factor failed.
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Missing or invalid session on a protected operation (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Duplicate { message, field, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "DUPLICATE".into(),
                    message,
                    field,
                },
            ),
            ApiError::PasswordPolicy { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "PASSWORD_POLICY".into(),
                    message,
                    field: Some("password".into()),
                },
            ),
            ApiError::InvalidCredentials { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".into(),
                    message: "Invalid email or password".into(),
                    field: None,
                },
            ),
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Log the database error for debugging
        log::error!("Database error: {}", e);

        match e {
            // Constraint backstop for uniqueness races the handler probe missed
            DbError::UniqueViolation { constraint, .. } => ApiError::Duplicate {
                message: "A record with this value already exists".to_string(),
                field: duplicate_field_from_constraint(&constraint),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert auth/credential errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials { .. } => ApiError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::WeakPassword { message, .. } => ApiError::PasswordPolicy {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::PasswordMismatch { .. } => ApiError::PasswordPolicy {
                message: "Password confirmation does not match".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::Hash { .. } | AuthError::InvalidHash { .. } => {
                log::error!("Credential error: {}", e);
                ApiError::Internal {
                    message: "Credential processing failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert domain errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, .. } => ApiError::Validation {
                message,
                field: None,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidGender { value, .. } => ApiError::Validation {
                message: format!(
                    "Invalid gender: {}. Valid values: unspecified, male, female",
                    value
                ),
                field: Some("gender".into()),
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidMaritalStatus { value, .. } => ApiError::Validation {
                message: format!(
                    "Invalid marital_status: {}. Valid values: unspecified, single, divorced, widowed, married",
                    value
                ),
                field: Some("marital_status".into()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Best-effort mapping of a SQLite constraint message to the offending field
fn duplicate_field_from_constraint(constraint: &str) -> Option<String> {
    if constraint.contains("email") {
        Some("email".into())
    } else if constraint.contains("phone_number") {
        Some("phone_number".into())
    } else if constraint.contains("activation_key") {
        Some("activation_key".into())
    } else {
        None
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
