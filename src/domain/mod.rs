pub mod todo;
pub mod validation;

pub use todo::{NewTodo, Todo, TodoPatch};
