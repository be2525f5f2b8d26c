//! Health check handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::state::AppState;
use crate::domain::{ApiResponse, HealthPayload, ReadyPayload};

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<ApiResponse<HealthPayload>> {
    Json(ApiResponse::success(HealthPayload {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Readiness probe - checks if the storage backend can serve requests.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<ReadyPayload>>) {
    let storage_ok = match state.storage.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Storage health check failed");
            false
        }
    };

    let status_code = if storage_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = ApiResponse {
        success: storage_ok,
        data: ReadyPayload {
            ready: storage_ok,
            backend: state.storage.backend_name().to_string(),
        },
    };

    (status_code, Json(response))
}
