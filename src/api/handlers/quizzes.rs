//! Quiz handlers.

use axum::{Json, extract::State};

use crate::api::extractors::ApiJson;
use crate::api::state::AppState;
use crate::domain::{ApiResponse, QuizPayload, QuizRequest};
use crate::error::{AppError, Result};

/// Draw the next quiz question.
///
/// # Errors
///
/// Returns `BadRequest` if `quiz_category` or `previous_questions` is
/// missing, `Unprocessable` for malformed fields or storage failures.
pub async fn play_quiz(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuizRequest>,
) -> Result<Json<ApiResponse<QuizPayload>>> {
    let (category, previous) = request.validate().map_err(AppError::BadRequest)?;

    let question = state
        .quiz_service
        .next_question(category, &previous)
        .await?;

    Ok(Json(ApiResponse::success(QuizPayload { question })))
}
