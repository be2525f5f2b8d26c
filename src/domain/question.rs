//! Question entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::DbId;

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    /// Question id, assigned by storage.
    pub id: DbId,

    /// Question text.
    pub question: String,

    /// Answer text.
    pub answer: String,

    /// Id of the category this question belongs to.
    pub category: DbId,

    /// Difficulty rating.
    pub difficulty: i32,
}

/// A validated question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    /// Question text.
    pub question: String,

    /// Answer text.
    pub answer: String,

    /// Difficulty rating.
    pub difficulty: i32,

    /// Category id.
    pub category: DbId,
}

impl NewQuestion {
    /// Attach a storage-assigned id.
    #[must_use]
    pub fn with_id(self, id: DbId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
