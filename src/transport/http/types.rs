use crate::app::todo_service::{Outcome, TodoService};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub todo_service: Arc<TodoService>,
}

/// Uniform error envelope: `{"error":{"message": …}}`.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorMessage,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody { error: ErrorMessage { message: message.into() } }),
    )
        .into_response()
}

/// Maps a service outcome onto the wire. The status always comes from the
/// service; this layer never substitutes its own.
pub fn render_outcome(outcome: Outcome) -> Response {
    match outcome {
        Outcome::Success { status, data } => (status, Json(data)).into_response(),
        Outcome::Empty { status } => status.into_response(),
        Outcome::Failure { status, message } => error_response(status, message),
    }
}

/// Store-level failures are not interpreted here; they surface as a 500 with
/// the error text in the envelope.
pub fn store_failure(error: anyhow::Error) -> Response {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Store error: {}", error),
    )
}
