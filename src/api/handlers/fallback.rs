//! Handlers for requests no route accepts.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Unknown path.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {method} {uri}"))
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
