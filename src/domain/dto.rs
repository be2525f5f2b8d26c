//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use super::deserializers::{int_or_string, optional_int_or_string};
use super::{CategoryMap, DbId, NewQuestion, Question};

/// Standard API response wrapper: `{"success": true, ...payload}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true` for successful responses.
    pub success: bool,

    /// Response payload, flattened into the top-level object.
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============== Requests ==============

/// `?page=N` query parameter.
///
/// A missing or non-numeric value selects the first page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

impl PageQuery {
    /// The requested 1-based page number.
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Body of `POST /questions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    /// Question text.
    #[serde(default)]
    pub question: Option<String>,

    /// Answer text.
    #[serde(default)]
    pub answer: Option<String>,

    /// Difficulty rating.
    #[serde(default, deserialize_with = "optional_int_or_string")]
    pub difficulty: Option<i32>,

    /// Category id.
    #[serde(default, deserialize_with = "optional_int_or_string")]
    pub category: Option<DbId>,
}

impl CreateQuestionRequest {
    /// Check that every field is present.
    ///
    /// # Errors
    ///
    /// Returns the names of the missing fields.
    pub fn validate(self) -> Result<NewQuestion, String> {
        match self {
            Self {
                question: Some(question),
                answer: Some(answer),
                difficulty: Some(difficulty),
                category: Some(category),
            } => Ok(NewQuestion {
                question,
                answer,
                difficulty,
                category,
            }),
            Self {
                question,
                answer,
                difficulty,
                category,
            } => {
                let missing: Vec<&str> = [
                    ("question", question.is_none()),
                    ("answer", answer.is_none()),
                    ("difficulty", difficulty.is_none()),
                    ("category", category.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(format!("missing required fields: {}", missing.join(", ")))
            }
        }
    }
}

/// Body of `POST /questions/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// Text to look for in question bodies.
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl SearchRequest {
    /// The search term, if one was given and it is non-empty.
    #[must_use]
    pub fn term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }
}

/// Category selector sent by the quiz client. Id `0` means all categories.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct QuizCategory {
    /// Category id.
    #[serde(deserialize_with = "int_or_string")]
    pub id: DbId,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    /// Category to draw from.
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,

    /// Ids of questions already asked in this quiz.
    #[serde(default)]
    pub previous_questions: Option<Vec<DbId>>,
}

impl QuizRequest {
    /// Split into `(category id, previously asked ids)`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the missing field.
    pub fn validate(self) -> Result<(DbId, Vec<DbId>), String> {
        let category = self
            .quiz_category
            .ok_or_else(|| "quiz_category is required".to_string())?;
        let previous = self
            .previous_questions
            .ok_or_else(|| "previous_questions is required".to_string())?;
        Ok((category.id, previous))
    }
}

// ============== Responses ==============

/// `GET /categories` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesPayload {
    /// Categories keyed by id.
    pub categories: CategoryMap,
}

/// Payload of the question listing, category and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsPayload {
    /// Questions on the requested page.
    pub questions: Vec<Question>,

    /// Number of questions across all pages.
    pub total_questions: usize,

    /// Category the listing is filtered by, if any.
    pub current_category: Option<DbId>,

    /// All categories (only on the unfiltered listing).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
}

/// `POST /questions` payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreatedPayload {
    /// Id of the new question.
    pub created: DbId,
}

/// `DELETE /questions/{id}` payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeletedPayload {
    /// Id of the removed question.
    pub deleted: DbId,
}

/// `POST /quizzes` payload. `question` is `null` once the pool is exhausted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizPayload {
    /// Next question to ask.
    pub question: Option<Question>,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthPayload {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,
}

/// Readiness check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyPayload {
    /// Overall readiness status.
    pub ready: bool,

    /// Storage backend in use.
    pub backend: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_response_flattens_payload() {
        let response = ApiResponse::success(DeletedPayload { deleted: 5 });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": true, "deleted": 5})
        );
    }

    #[test]
    fn test_quiz_payload_keeps_null_question() {
        let response = ApiResponse::success(QuizPayload { question: None });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": true, "question": null})
        );
    }

    #[test]
    fn test_page_query_defaults() {
        let query: PageQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.page(), 1);

        let query: PageQuery = serde_json::from_value(json!({"page": "3"})).unwrap();
        assert_eq!(query.page(), 3);

        let query: PageQuery = serde_json::from_value(json!({"page": "abc"})).unwrap();
        assert_eq!(query.page(), 1);

        let query: PageQuery = serde_json::from_value(json!({"page": "-2"})).unwrap();
        assert_eq!(query.page(), -2);
    }

    #[test]
    fn test_create_question_requires_all_fields() {
        let request: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "Who painted the Mona Lisa?",
            "answer": "Leonardo da Vinci",
            "difficulty": 2,
            "category": "2"
        }))
        .unwrap();
        let question = request.validate().unwrap();
        assert_eq!(question.category, 2);
        assert_eq!(question.difficulty, 2);

        let request: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "Who painted the Mona Lisa?",
            "difficulty": null
        }))
        .unwrap();
        let err = request.validate().unwrap_err();
        assert_eq!(err, "missing required fields: answer, difficulty, category");
    }

    #[test]
    fn test_create_question_rejects_wrong_types() {
        let result = serde_json::from_value::<CreateQuestionRequest>(json!({
            "question": "Q",
            "answer": "A",
            "difficulty": "hard",
            "category": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_search_term() {
        let request: SearchRequest = serde_json::from_value(json!({"searchTerm": "title"})).unwrap();
        assert_eq!(request.term(), Some("title"));

        let request: SearchRequest = serde_json::from_value(json!({"searchTerm": ""})).unwrap();
        assert_eq!(request.term(), None);

        let request: SearchRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.term(), None);
    }

    #[test]
    fn test_quiz_request_validation() {
        let request: QuizRequest = serde_json::from_value(json!({
            "quiz_category": {"type": "Science", "id": "1"},
            "previous_questions": [4, 9]
        }))
        .unwrap();
        assert_eq!(request.validate().unwrap(), (1, vec![4, 9]));

        let request: QuizRequest =
            serde_json::from_value(json!({"quiz_category": {"id": 0}})).unwrap();
        assert_eq!(
            request.validate().unwrap_err(),
            "previous_questions is required"
        );

        assert!(
            serde_json::from_value::<QuizRequest>(json!({
                "quiz_category": {"type": "Science"},
                "previous_questions": []
            }))
            .is_err()
        );
    }
}
