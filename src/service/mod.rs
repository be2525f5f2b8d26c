//! Service layer module.
//!
//! Contains the business logic between the HTTP handlers and storage.

pub mod pagination;
pub mod question;
pub mod quiz;

pub use pagination::{QUESTIONS_PER_PAGE, paginate};
pub use question::{QuestionPage, QuestionService};
pub use quiz::{ALL_CATEGORIES, QuizService, pick_question};
