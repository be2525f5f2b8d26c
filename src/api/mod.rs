//! API layer module.
//!
//! HTTP handlers, extractors, and routing for the trivia service.

pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
