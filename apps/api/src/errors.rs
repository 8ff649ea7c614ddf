#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::identity::{AuthErrorKind, IdentityError};
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Identity(err) => identity_response(err),
            AppError::Extract(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNSUPPORTED_DOCUMENT",
                err.to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Maps identity failures onto user-facing statuses. Provider rejections keep
/// their specific reason; transport failures are reported as a bad gateway.
fn identity_response(err: &IdentityError) -> (StatusCode, &'static str, String) {
    match err {
        IdentityError::Rejected(kind) => {
            let (status, code) = match kind {
                AuthErrorKind::EmailExists => (StatusCode::CONFLICT, "EMAIL_EXISTS"),
                AuthErrorKind::WeakPassword => (StatusCode::BAD_REQUEST, "WEAK_PASSWORD"),
                AuthErrorKind::InvalidEmail => (StatusCode::BAD_REQUEST, "INVALID_EMAIL"),
                AuthErrorKind::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
                }
                AuthErrorKind::TooManyAttempts => {
                    (StatusCode::TOO_MANY_REQUESTS, "TOO_MANY_ATTEMPTS")
                }
                AuthErrorKind::Other(_) => (StatusCode::BAD_GATEWAY, "IDENTITY_ERROR"),
            };
            (status, code, kind.to_string())
        }
        IdentityError::Http(e) => {
            tracing::error!("Identity provider unreachable: {e}");
            (
                StatusCode::BAD_GATEWAY,
                "IDENTITY_ERROR",
                "The identity service could not be reached".to_string(),
            )
        }
    }
}
