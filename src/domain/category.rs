//! Category entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::DbId;

/// A question category, e.g. `{id: 1, type: "Science"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Category id.
    pub id: DbId,

    /// Display label.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: DbId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Categories keyed by id, serialized as a JSON object `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<DbId, String>;

/// Build the id → label mapping returned by the listing endpoints.
pub fn category_map<'a>(categories: impl IntoIterator<Item = &'a Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}
