//! In-memory storage backend.
//!
//! Keeps both tables in ordered maps behind a read/write lock. Suitable for
//! development and tests; optionally seeded from a JSON file:
//!
//! ```json
//! {
//!   "categories": [{"id": 1, "type": "Science"}],
//!   "questions": [
//!     {"question": "What is H2O?", "answer": "Water", "difficulty": 1, "category": 1}
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;
use tracing::info;

use crate::config::MemoryStorageConfig;
use crate::domain::{Category, DbId, NewQuestion, Question};
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::{CategoryStorage, QuestionStorage, Storage};

/// Initial contents of a [`MemoryStorage`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    /// Categories to load.
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Questions to load; those without an id are numbered after the rest.
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

/// A question entry of a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedQuestion {
    /// Fixed id, if any.
    #[serde(default)]
    pub id: Option<DbId>,
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
    /// Difficulty rating.
    pub difficulty: i32,
    /// Category id.
    pub category: DbId,
}

impl SeedData {
    /// Read seed data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> StorageResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            StorageError::FileIO(format!("Failed to read seed file {}: {e}", path.display()))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<DbId, Category>,
    questions: BTreeMap<DbId, Question>,
}

impl Tables {
    fn next_question_id(&self) -> StorageResult<DbId> {
        match self.questions.keys().next_back() {
            None => Ok(1),
            Some(last) => last
                .checked_add(1)
                .ok_or_else(|| StorageError::Query("question id space exhausted".to_string())),
        }
    }
}

/// In-memory storage implementation.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-filled with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if two categories or two questions share an id.
    pub fn with_seed(seed: SeedData) -> StorageResult<Self> {
        let mut tables = Tables::default();

        for category in seed.categories {
            let id = category.id;
            if tables.categories.insert(id, category).is_some() {
                return Err(StorageError::Serialization(format!(
                    "duplicate category id {id} in seed data"
                )));
            }
        }

        let (fixed, numbered): (Vec<_>, Vec<_>) =
            seed.questions.into_iter().partition(|q| q.id.is_some());

        for entry in fixed.into_iter().chain(numbered) {
            let id = match entry.id {
                Some(id) => id,
                None => tables.next_question_id()?,
            };
            let question = NewQuestion {
                question: entry.question,
                answer: entry.answer,
                difficulty: entry.difficulty,
                category: entry.category,
            }
            .with_id(id);
            if tables.questions.insert(id, question).is_some() {
                return Err(StorageError::Serialization(format!(
                    "duplicate question id {id} in seed data"
                )));
            }
        }

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    /// Create a storage from configuration, loading the seed file if one is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed file cannot be loaded.
    pub fn from_config(config: &MemoryStorageConfig) -> StorageResult<Self> {
        let Some(path) = &config.seed_file else {
            return Ok(Self::new());
        };

        let storage = Self::with_seed(SeedData::from_file(path)?)?;
        {
            let tables = storage.tables.read();
            info!(
                seed_file = %path.display(),
                categories = tables.categories.len(),
                questions = tables.questions.len(),
                "Loaded seed data"
            );
        }
        Ok(storage)
    }

    fn select_questions(&self, predicate: impl Fn(&Question) -> bool) -> Vec<Question> {
        self.tables
            .read()
            .questions
            .values()
            .filter(|question| predicate(question))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CategoryStorage for MemoryStorage {
    async fn list_categories(&self) -> StorageResult<Vec<Category>> {
        Ok(self.tables.read().categories.values().cloned().collect())
    }

    async fn category_exists(&self, id: DbId) -> StorageResult<bool> {
        Ok(self.tables.read().categories.contains_key(&id))
    }
}

#[async_trait]
impl QuestionStorage for MemoryStorage {
    async fn list_questions(&self) -> StorageResult<Vec<Question>> {
        Ok(self.select_questions(|_| true))
    }

    async fn questions_in_category(&self, category: DbId) -> StorageResult<Vec<Question>> {
        Ok(self.select_questions(|question| question.category == category))
    }

    async fn search_questions(&self, term: &str) -> StorageResult<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self.select_questions(|question| question.question.to_lowercase().contains(&needle)))
    }

    async fn insert_question(&self, question: NewQuestion) -> StorageResult<Question> {
        let mut tables = self.tables.write();
        let id = tables.next_question_id()?;
        let question = question.with_id(id);
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: DbId) -> StorageResult<bool> {
        Ok(self.tables.write().questions.remove(&id).is_some())
    }

    async fn quiz_pool(
        &self,
        category: Option<DbId>,
        exclude: &[DbId],
    ) -> StorageResult<Vec<Question>> {
        Ok(self.select_questions(|question| {
            category.is_none_or(|id| question.category == id) && !exclude.contains(&question.id)
        }))
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
