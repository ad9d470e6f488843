//! API error types with IntoResponse.
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Business-rule failures (wrong password, insufficient funds) surface
//! their specific message; store failures are logged and returned as a
//! generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use bankctl_core::ValidationError;

use crate::db::repos::{CredentialError, LedgerError};

/// API error type with automatic HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Credential store failure (401 / 409 / 500)
    Credential(CredentialError),

    /// Account ledger failure (404 / 422 / 500)
    Ledger(LedgerError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::Credential(CredentialError::DuplicateEmail) => (
                StatusCode::CONFLICT,
                json!({
                    "error": "duplicate_email",
                    "message": CredentialError::DuplicateEmail.to_string()
                }),
            ),
            Self::Credential(e @ CredentialError::EmailNotFound)
            | Self::Credential(e @ CredentialError::WrongPassword) => (
                StatusCode::UNAUTHORIZED,
                json!({
                    "error": "authentication_failed",
                    "message": e.to_string()
                }),
            ),
            Self::Ledger(LedgerError::AccountNotFound { id }) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "account_not_found",
                    "message": format!("account {id} not found")
                }),
            ),
            Self::Ledger(e @ LedgerError::InsufficientFunds { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "insufficient_funds",
                    "message": e.to_string()
                }),
            ),
            Self::Credential(e) => {
                // Log the actual error, return generic message
                tracing::error!("Credential store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
            Self::Ledger(e) => {
                tracing::error!("Ledger error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<CredentialError> for ApiError {
    fn from(e: CredentialError) -> Self {
        Self::Credential(e)
    }
}

impl From<LedgerError> for ApiError {
    fn from(e: LedgerError) -> Self {
        Self::Ledger(e)
    }
}
