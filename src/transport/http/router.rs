use crate::domain::todo::{NewTodo, Todo, TodoPatch};
use crate::transport::http::handlers::{health, todos};
use crate::transport::http::types::{AppState, ErrorBody, ErrorMessage};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        todos::create_todo_handler,
        todos::find_all_todos_handler,
        todos::find_todo_by_id_handler,
        todos::update_todo_handler,
        todos::delete_todo_handler
    ),
    components(schemas(Todo, NewTodo, TodoPatch, ErrorBody, ErrorMessage))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/todos",
            get(todos::find_all_todos_handler).post(todos::create_todo_handler),
        )
        .route(
            "/todos/:id",
            get(todos::find_todo_by_id_handler)
                .put(todos::update_todo_handler)
                .delete(todos::delete_todo_handler),
        )
        .with_state(app_state)
}
