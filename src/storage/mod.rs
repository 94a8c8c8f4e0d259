//! Persistence boundary for todo records.
//!
//! The service layer only sees [`TodoStore`]; storage failures propagate as
//! opaque `anyhow::Error`s that the core never interprets.

pub mod memory;
pub mod postgres;

use crate::domain::todo::{NewTodo, Todo, TodoPatch};
use async_trait::async_trait;

pub use memory::InMemoryTodoStore;
pub use postgres::PgTodoStore;

/// Capability interface over the persisted `todos` table.
///
/// Implementations assign ids on `create` and apply only the supplied
/// fields on `update`.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Inserts a new record and returns its store-assigned id.
    async fn create(&self, todo: &NewTodo) -> anyhow::Result<i64>;

    async fn find_all(&self) -> anyhow::Result<Vec<Todo>>;

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Todo>>;

    async fn exists(&self, id: i64) -> anyhow::Result<bool>;

    /// Applies the supplied fields to an existing row. Callers check
    /// existence first; updating an absent id is a no-op.
    async fn update(&self, id: i64, patch: &TodoPatch) -> anyhow::Result<()>;

    async fn delete(&self, id: i64) -> anyhow::Result<()>;

    /// Cheap reachability probe for healthchecks.
    async fn ping(&self) -> anyhow::Result<()>;
}
