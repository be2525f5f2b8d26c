//! Category handlers.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::{ApiResponse, CategoriesPayload};
use crate::error::Result;

/// List all categories as an id → label mapping.
///
/// # Errors
///
/// Returns `NotFound` if there are no categories.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CategoriesPayload>>> {
    let categories = state.question_service.categories().await?;
    Ok(Json(ApiResponse::success(CategoriesPayload { categories })))
}
