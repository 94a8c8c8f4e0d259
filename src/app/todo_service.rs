//! The todo orchestration service.
//!
//! This module sits between the HTTP adapter and the record store. For each
//! operation it composes:
//! 1.  Schema validation of the incoming payload.
//! 2.  An existence check for mutating operations.
//! 3.  The store call itself.
//!
//! into a single [`Outcome`]. Validation and not-found cases are ordinary
//! outcomes; store failures are `Err` and propagate to the caller
//! uninterpreted.

use crate::domain::todo::{NewTodo, TodoPatch};
use crate::domain::validation;
use crate::storage::TodoStore;
use axum::http::StatusCode;
use serde_json::json;
use serde_json::Value as JsonValue;
use std::sync::Arc;

const TODO_NOT_FOUND: &str = "Todo not found";

/// The uniform result contract every operation resolves to. Controllers echo
/// `status` verbatim and never invent their own codes.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Terminal success with a body (200/201).
    Success { status: StatusCode, data: JsonValue },
    /// Terminal success with no body (204).
    Empty { status: StatusCode },
    /// Terminal failure with a user-facing message (400/404).
    Failure { status: StatusCode, message: String },
}

impl Outcome {
    fn bad_request(message: String) -> Self {
        Outcome::Failure { status: StatusCode::BAD_REQUEST, message }
    }

    fn not_found() -> Self {
        Outcome::Failure {
            status: StatusCode::NOT_FOUND,
            message: TODO_NOT_FOUND.to_string(),
        }
    }
}

/// Orchestrates validation, existence checks and persistence. The store is
/// injected at construction so tests can substitute an in-memory double.
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Validates a create payload and inserts it. The store is never called
    /// for a payload that fails schema validation.
    pub async fn create(&self, body: &JsonValue) -> anyhow::Result<Outcome> {
        if let Err(error) = validation::validate_create(body) {
            return Ok(Outcome::bad_request(error.message));
        }

        let new_todo: NewTodo = serde_json::from_value(body.clone())?;
        let id = self.store.create(&new_todo).await?;

        Ok(Outcome::Success {
            status: StatusCode::CREATED,
            data: json!({ "id": id }),
        })
    }

    /// Returns every record, unfiltered and unpaginated.
    pub async fn find_all(&self) -> anyhow::Result<Outcome> {
        let todos = self.store.find_all().await?;

        Ok(Outcome::Success {
            status: StatusCode::OK,
            data: serde_json::to_value(todos)?,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> anyhow::Result<Outcome> {
        let Some(todo) = self.store.find_by_id(id).await? else {
            return Ok(Outcome::not_found());
        };

        Ok(Outcome::Success {
            status: StatusCode::OK,
            data: serde_json::to_value(todo)?,
        })
    }

    /// Validates a partial payload, checks existence, then applies only the
    /// supplied fields. The existence check never runs for an invalid
    /// payload.
    pub async fn update(&self, id: i64, body: &JsonValue) -> anyhow::Result<Outcome> {
        if let Err(error) = validation::validate_edit(body) {
            return Ok(Outcome::bad_request(error.message));
        }

        if !self.store.exists(id).await? {
            return Ok(Outcome::not_found());
        }

        let patch: TodoPatch = serde_json::from_value(body.clone())?;
        self.store.update(id, &patch).await?;

        Ok(Outcome::Empty { status: StatusCode::NO_CONTENT })
    }

    /// Deletion is terminal: a second delete of the same id reports 404.
    pub async fn delete(&self, id: i64) -> anyhow::Result<Outcome> {
        if !self.store.exists(id).await? {
            return Ok(Outcome::not_found());
        }

        self.store.delete(id).await?;

        Ok(Outcome::Empty { status: StatusCode::NO_CONTENT })
    }

    /// Store reachability, surfaced by the healthcheck handler.
    pub async fn ping_store(&self) -> anyhow::Result<()> {
        self.store.ping().await
    }
}
