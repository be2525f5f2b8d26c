//! Question handlers.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::api::extractors::{ApiJson, ApiQuery};
use crate::api::state::AppState;
use crate::domain::{
    ApiResponse, CreateQuestionRequest, CreatedPayload, DbId, DeletedPayload, PageQuery,
    QuestionsPayload, SearchRequest,
};
use crate::error::{AppError, Result};

/// Non-integer ids never match a route.
fn path_id<T>(path: std::result::Result<Path<T>, PathRejection>) -> Result<T> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::NotFound(rejection.body_text()))
}

/// List one page of all questions together with every category.
///
/// # Errors
///
/// Returns `NotFound` if the requested page is empty.
pub async fn list_questions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<ApiResponse<QuestionsPayload>>> {
    let (page, categories) = state.question_service.list(query.page()).await?;

    Ok(Json(ApiResponse::success(QuestionsPayload {
        questions: page.questions,
        total_questions: page.total,
        current_category: None,
        categories: Some(categories),
    })))
}

/// List one page of the questions in a category.
///
/// # Errors
///
/// Returns `NotFound` if the requested page is empty.
pub async fn list_by_category(
    State(state): State<AppState>,
    path: std::result::Result<Path<DbId>, PathRejection>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<ApiResponse<QuestionsPayload>>> {
    let category = path_id(path)?;
    let page = state
        .question_service
        .by_category(category, query.page())
        .await?;

    Ok(Json(ApiResponse::success(QuestionsPayload {
        questions: page.questions,
        total_questions: page.total,
        current_category: Some(category),
        categories: None,
    })))
}

/// Delete a question.
///
/// # Errors
///
/// Returns `Unprocessable` if the id is out of range, or the question does not
/// exist or cannot be removed.
pub async fn delete_question(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<DeletedPayload>>> {
    let id = DbId::try_from(path_id(path)?)
        .map_err(|_| AppError::Unprocessable("question id out of range".to_string()))?;
    state.question_service.delete(id).await?;

    Ok(Json(ApiResponse::success(DeletedPayload { deleted: id })))
}

/// Create a question.
///
/// # Errors
///
/// Returns `BadRequest` if a field is missing, `Unprocessable` if a field has
/// the wrong type, the category does not exist or the insert fails.
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateQuestionRequest>,
) -> Result<Json<ApiResponse<CreatedPayload>>> {
    let question = request.validate().map_err(AppError::BadRequest)?;
    let created = state.question_service.create(question).await?;

    Ok(Json(ApiResponse::success(CreatedPayload {
        created: created.id,
    })))
}

/// Search question text, case-insensitively.
///
/// # Errors
///
/// Returns `NotFound` if the body is unreadable, the term is empty, or the
/// search fails.
pub async fn search_questions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PageQuery>,
    body: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<QuestionsPayload>>> {
    let Json(request) = body.map_err(|rejection| AppError::NotFound(rejection.body_text()))?;
    let term = request
        .term()
        .ok_or_else(|| AppError::NotFound("empty search term".to_string()))?;

    let page = state.question_service.search(term, query.page()).await?;

    Ok(Json(ApiResponse::success(QuestionsPayload {
        questions: page.questions,
        total_questions: page.total,
        current_category: None,
        categories: None,
    })))
}
