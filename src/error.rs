//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Startup configuration failures. Fatal: the process must not come up.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),
    #[error("invalid {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

/// Failures surfaced by the persistence gateway. Handlers switch on the
/// variant; nothing inspects driver error strings downstream.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("student not found")]
    NotFound,
    #[error("email is already registered")]
    DuplicateEmail,
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}

/// One violated rule, reported to the client under its field name.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: &'static str,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("student not found")]
    NotFound,
    #[error("{0}")]
    Storage(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound,
            StoreError::DuplicateEmail => AppError::Storage(err.to_string()),
            StoreError::Database(e) => AppError::Storage(e.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    details: None,
                },
            ),
            AppError::Validation(errors) => {
                let mut details = serde_json::Map::new();
                for e in &errors {
                    details.insert(e.field.to_string(), e.rule.into());
                }
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        error: "validation failed".into(),
                        details: Some(serde_json::Value::Object(details)),
                    },
                )
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "student not found".into(),
                    details: None,
                },
            ),
            AppError::Storage(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "storage failure".into(),
                    details: Some(serde_json::Value::String(message)),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
