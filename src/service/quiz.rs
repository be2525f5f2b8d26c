//! Quiz service.
//!
//! Draws the next question of a quiz round from the questions the player
//! has not seen yet.

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use crate::domain::{DbId, Question};
use crate::error::Result;
use crate::storage::traits::{QuestionStorage, Storage};

/// Category id that selects questions from every category.
pub const ALL_CATEGORIES: DbId = 0;

/// Service for quiz play.
pub struct QuizService {
    /// Storage backend.
    storage: Arc<dyn Storage>,
}

impl QuizService {
    /// Create a new quiz service.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Pick a random question from `category` that is not in `previous`.
    ///
    /// Returns `None` once every eligible question has been asked.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn next_question(
        &self,
        category: DbId,
        previous: &[DbId],
    ) -> Result<Option<Question>> {
        let filter = (category != ALL_CATEGORIES).then_some(category);
        let pool = self.storage.quiz_pool(filter, previous).await?;
        debug!(category, asked = previous.len(), remaining = pool.len(), "Built quiz pool");

        let mut rng = rand::rng();
        Ok(pick_question(pool, &mut rng))
    }
}

/// Choose one question uniformly at random, or `None` if the pool is empty.
pub fn pick_question<R: Rng + ?Sized>(pool: Vec<Question>, rng: &mut R) -> Option<Question> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.random_range(0..pool.len());
    pool.into_iter().nth(index)
}
