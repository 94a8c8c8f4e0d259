//! Todo route handlers.
//!
//! Each handler runs its route's guard chain, hands the request to the
//! orchestration service, and renders the resulting [`Outcome`] verbatim.
//! Status codes are decided by the service, never here.

use crate::domain::todo::{NewTodo, Todo, TodoPatch};
use crate::transport::http::guards;
use crate::transport::http::types::{
    error_response, render_outcome, store_failure, AppState, ErrorBody,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;

/// A body that failed JSON parsing gets the same rejection as a structurally
/// empty one.
fn json_body(request: Result<Json<JsonValue>, JsonRejection>) -> Result<JsonValue, Response> {
    match request {
        Ok(Json(body)) => Ok(body),
        Err(_) => Err(error_response(StatusCode::BAD_REQUEST, guards::INVALID_BODY)),
    }
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body = NewTodo,
    responses(
        (status = 201, description = "Todo created, body carries the assigned id"),
        (status = 400, description = "Missing/left over fields or schema violation", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create_todo_handler(
    State(state): State<AppState>,
    request: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let body = match json_body(request) {
        Ok(body) => body,
        Err(response) => return response,
    };

    if let Err(rejection) = guards::validate_body(&body) {
        return rejection.into_response();
    }
    if let Err(rejection) = guards::validate_new_todo(&body) {
        return rejection.into_response();
    }

    match state.todo_service.create(&body).await {
        Ok(outcome) => render_outcome(outcome),
        Err(error) => store_failure(error),
    }
}

#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "All todos", body = [Todo]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn find_all_todos_handler(State(state): State<AppState>) -> Response {
    match state.todo_service.find_all().await {
        Ok(outcome) => render_outcome(outcome),
        Err(error) => store_failure(error),
    }
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = String, Path, description = "Todo id (positive integer)")),
    responses(
        (status = 200, description = "The todo", body = Todo),
        (status = 400, description = "Id is not a positive number", body = ErrorBody),
        (status = 404, description = "No todo with that id", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn find_todo_by_id_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match guards::validate_id(&raw_id) {
        Ok(id) => id,
        Err(rejection) => return rejection.into_response(),
    };

    match state.todo_service.find_by_id(id).await {
        Ok(outcome) => render_outcome(outcome),
        Err(error) => store_failure(error),
    }
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(("id" = String, Path, description = "Todo id (positive integer)")),
    request_body = TodoPatch,
    responses(
        (status = 204, description = "Todo updated"),
        (status = 400, description = "Bad id, empty body, unknown keys or schema violation", body = ErrorBody),
        (status = 404, description = "No todo with that id", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn update_todo_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    request: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let id = match guards::validate_id(&raw_id) {
        Ok(id) => id,
        Err(rejection) => return rejection.into_response(),
    };
    let body = match json_body(request) {
        Ok(body) => body,
        Err(response) => return response,
    };

    if let Err(rejection) = guards::validate_body(&body) {
        return rejection.into_response();
    }
    if let Err(rejection) = guards::validate_todo_update(&body) {
        return rejection.into_response();
    }

    match state.todo_service.update(id, &body).await {
        Ok(outcome) => render_outcome(outcome),
        Err(error) => store_failure(error),
    }
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = String, Path, description = "Todo id (positive integer)")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, description = "Id is not a positive number", body = ErrorBody),
        (status = 404, description = "No todo with that id", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match guards::validate_id(&raw_id) {
        Ok(id) => id,
        Err(rejection) => return rejection.into_response(),
    };

    match state.todo_service.delete(id).await {
        Ok(outcome) => render_outcome(outcome),
        Err(error) => store_failure(error),
    }
}
