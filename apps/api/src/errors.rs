use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const VALIDATION_FAILED: &str = "Input payload validation failed";
pub const EMAIL_EXISTS: &str = "Sorry. That email already exists.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        /// Offending field name mapped to the reason it was rejected.
        errors: BTreeMap<String, String>,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(errors: BTreeMap<String, String>) -> Self {
        AppError::Validation {
            message: VALIDATION_FAILED.to_string(),
            errors,
        }
    }

    pub fn duplicate_email() -> Self {
        AppError::Conflict(EMAIL_EXISTS.to_string())
    }

    pub fn user_not_found(id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("User {id} does not exist"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message.clone())
            }
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, "CONFLICT", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
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

        let body = match self {
            AppError::Validation { errors, .. } if !errors.is_empty() => Json(json!({
                "code": code,
                "message": message,
                "errors": errors,
            })),
            _ => Json(json!({
                "code": code,
                "message": message,
            })),
        };

        (status, body).into_response()
    }
}
