//! Storage trait definitions.
//!
//! These traits define the interface for storage backends, enabling swapping
//! between different implementations without changing business logic.

use async_trait::async_trait;

use crate::domain::{Category, DbId, NewQuestion, Question};
use crate::error::StorageResult;

/// Read access to the category table.
#[async_trait]
pub trait CategoryStorage: Send + Sync {
    /// List all categories ordered by id.
    async fn list_categories(&self) -> StorageResult<Vec<Category>>;

    /// Check whether a category with this id exists.
    async fn category_exists(&self, id: DbId) -> StorageResult<bool>;
}

/// Question table operations.
#[async_trait]
pub trait QuestionStorage: Send + Sync {
    /// List all questions ordered by id.
    async fn list_questions(&self) -> StorageResult<Vec<Question>>;

    /// List the questions of one category ordered by id.
    async fn questions_in_category(&self, category: DbId) -> StorageResult<Vec<Question>>;

    /// Case-insensitive substring search over question text, ordered by id.
    async fn search_questions(&self, term: &str) -> StorageResult<Vec<Question>>;

    /// Insert a question and return it with its assigned id.
    async fn insert_question(&self, question: NewQuestion) -> StorageResult<Question>;

    /// Delete a question by id.
    ///
    /// Returns `false` if no question had this id.
    async fn delete_question(&self, id: DbId) -> StorageResult<bool>;

    /// Questions eligible for a quiz round, ordered by id.
    ///
    /// # Arguments
    ///
    /// * `category` - Restrict to this category, or `None` for every category
    /// * `exclude` - Ids of questions already asked
    async fn quiz_pool(
        &self,
        category: Option<DbId>,
        exclude: &[DbId],
    ) -> StorageResult<Vec<Question>>;
}

/// Combined storage trait for all storage operations.
#[async_trait]
pub trait Storage: CategoryStorage + QuestionStorage {
    /// Check if the storage backend is healthy and reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Get the storage backend name.
    fn backend_name(&self) -> &'static str;
}
