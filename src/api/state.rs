//! Application state for Axum handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::service::{QuestionService, QuizService};
use crate::storage::traits::Storage;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend.
    pub storage: Arc<dyn Storage>,
    /// Question service.
    pub question_service: Arc<QuestionService>,
    /// Quiz service.
    pub quiz_service: Arc<QuizService>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: &AppConfig, storage: Arc<dyn Storage>) -> Self {
        let question_service = Arc::new(QuestionService::new(
            Arc::clone(&storage),
            &config.questions,
        ));

        let quiz_service = Arc::new(QuizService::new(Arc::clone(&storage)));

        Self {
            storage,
            question_service,
            quiz_service,
        }
    }
}
