pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::todo_service::{Outcome, TodoService};
pub use domain::todo::{NewTodo, Todo, TodoPatch};
pub use storage::{InMemoryTodoStore, PgTodoStore, TodoStore};
