//! Todo record types.
//!
//! `id` is assigned by the store on insert and never by callers. `done` is an
//! integer flag constrained to {0, 1} (the schema layer enforces the range).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted todo row, as returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub done: i32,
}

/// Fields accepted on creation. `done` is not part of the create surface;
/// new rows start with the store's default (0).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

/// Partial update: only the supplied fields are written.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<i32>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.done.is_none()
    }
}
