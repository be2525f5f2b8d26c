//! Error handling module.
//!
//! Faults are raised as explicit variants where they happen and mapped to
//! one of the user-visible HTTP codes when the response is rendered.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing request input.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Empty result set or unknown route.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Route exists but does not accept the method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Operation-level failure (missing row, type mismatch, broken reference).
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable(_) | Self::Storage(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed, client-facing message for this error.
    ///
    /// The detail carried by the variant is only logged.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad request",
            Self::NotFound(_) => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable(_) | Self::Storage(_) => "unprocessable",
            Self::Internal(_) => "internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();

        if matches!(self, Self::Storage(_) | Self::Internal(_)) {
            tracing::error!(status = %status, detail = %detail, "Request failed");
        } else {
            tracing::warn!(status = %status, detail = %detail, "Request rejected");
        }

        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.public_message(),
        }));

        (status, body).into_response()
    }
}

/// Storage-specific error type.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Connection error.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Query execution error.
    #[error("Query failed: {0}")]
    Query(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O error.
    #[error("File I/O error: {0}")]
    FileIO(String),

    /// Referenced row does not exist.
    #[error("Data not found: {0}")]
    NotFound(String),

    /// Backend not available.
    #[error("Storage backend unavailable")]
    Unavailable,
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileIO(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound(err.to_string()),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => Self::Unavailable,
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::Configuration(_) => {
                Self::Connection(err.to_string())
            }
            other => Self::Query(other.to_string()),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias using `StorageError`.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
