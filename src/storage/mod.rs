//! Storage layer module.
//!
//! This module provides trait-based storage abstraction allowing different backends
//! to be used without changing business logic.

pub mod factory;
pub mod memory;
pub mod postgres;
pub mod traits;

pub use factory::create_storage;
pub use memory::{MemoryStorage, SeedData, SeedQuestion};
pub use postgres::PostgresStorage;
pub use traits::{CategoryStorage, QuestionStorage, Storage};
