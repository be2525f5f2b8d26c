//! Domain models for the trivia service.
//!
//! Entities stored by the storage layer and the request/response contracts
//! of the HTTP API.

pub mod category;
pub mod deserializers;
pub mod dto;
pub mod question;

pub use category::{Category, CategoryMap, category_map};
pub use dto::{
    ApiResponse, CategoriesPayload, CreateQuestionRequest, CreatedPayload, DeletedPayload,
    HealthPayload, PageQuery, QuestionsPayload, QuizCategory, QuizPayload, QuizRequest,
    ReadyPayload, SearchRequest,
};
pub use question::{NewQuestion, Question};

/// Primary key type of both tables (`INTEGER` columns).
pub type DbId = i32;
