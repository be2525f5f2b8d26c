//! Question service.
//!
//! Listing, search, creation and deletion of questions.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::QuestionsConfig;
use crate::domain::{CategoryMap, DbId, NewQuestion, Question, category_map};
use crate::error::{AppError, Result};
use crate::service::pagination::paginate;
use crate::storage::traits::{CategoryStorage, QuestionStorage, Storage};

/// One page of a question listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    /// Questions on this page.
    pub questions: Vec<Question>,
    /// Number of questions across all pages.
    pub total: usize,
}

/// Service for question listing and management.
pub struct QuestionService {
    /// Storage backend.
    storage: Arc<dyn Storage>,
    /// Questions per page.
    per_page: usize,
}

impl QuestionService {
    /// Create a new question service.
    pub fn new(storage: Arc<dyn Storage>, config: &QuestionsConfig) -> Self {
        Self {
            storage,
            per_page: config.per_page,
        }
    }

    fn page_of(&self, questions: &[Question], page: i64) -> QuestionPage {
        QuestionPage {
            questions: paginate(questions, page, self.per_page).to_vec(),
            total: questions.len(),
        }
    }

    /// All categories keyed by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there are no categories, or a storage error.
    pub async fn categories(&self) -> Result<CategoryMap> {
        let categories = self.storage.list_categories().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("no categories".to_string()));
        }
        Ok(category_map(&categories))
    }

    /// One page of all questions, plus every category.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the page is empty, or a storage error.
    pub async fn list(&self, page: i64) -> Result<(QuestionPage, CategoryMap)> {
        let questions = self.storage.list_questions().await?;
        let result = self.page_of(&questions, page);
        if result.questions.is_empty() {
            return Err(AppError::NotFound(format!("question page {page}")));
        }

        let categories = self.storage.list_categories().await?;
        Ok((result, category_map(&categories)))
    }

    /// One page of the questions in `category`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the page is empty, or a storage error.
    pub async fn by_category(&self, category: DbId, page: i64) -> Result<QuestionPage> {
        let questions = self.storage.questions_in_category(category).await?;
        let result = self.page_of(&questions, page);
        if result.questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "question page {page} of category {category}"
            )));
        }
        Ok(result)
    }

    /// One page of the questions whose text contains `term`, ignoring case.
    ///
    /// An empty page is not an error here; a failing query is reported as
    /// `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the term is empty or the search fails.
    pub async fn search(&self, term: &str, page: i64) -> Result<QuestionPage> {
        if term.is_empty() {
            return Err(AppError::NotFound("empty search term".to_string()));
        }

        let questions = self
            .storage
            .search_questions(term)
            .await
            .map_err(|e| AppError::NotFound(format!("search for {term:?} failed: {e}")))?;
        debug!(term, matches = questions.len(), "Searched questions");

        Ok(self.page_of(&questions, page))
    }

    /// Store a new question.
    ///
    /// # Errors
    ///
    /// Returns `Unprocessable` if the category does not exist, or a storage error.
    pub async fn create(&self, question: NewQuestion) -> Result<Question> {
        if !self.storage.category_exists(question.category).await? {
            return Err(AppError::Unprocessable(format!(
                "category {} does not exist",
                question.category
            )));
        }

        let question = self.storage.insert_question(question).await?;
        info!(id = question.id, category = question.category, "Question created");
        Ok(question)
    }

    /// Delete a question.
    ///
    /// # Errors
    ///
    /// Returns `Unprocessable` if no question has this id, or a storage error.
    pub async fn delete(&self, id: DbId) -> Result<()> {
        if !self.storage.delete_question(id).await? {
            return Err(AppError::Unprocessable(format!(
                "question {id} does not exist"
            )));
        }

        info!(id, "Question deleted");
        Ok(())
    }
}
