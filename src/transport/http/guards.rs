//! Request gatekeeping: ordered structural checks run by the handlers before
//! the orchestration service is invoked.
//!
//! Each guard either lets the handler proceed or short-circuits with a 400
//! response — a sequential guard-clause pipeline, not framework middleware.
//! Route chains: create = [validate_body, validate_new_todo]; read-by-id and
//! delete = [validate_id]; update = [validate_id, validate_body,
//! validate_todo_update].

use crate::domain::validation::fields::{extra_fields, missing_fields};
use crate::transport::http::types::error_response;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value as JsonValue;

pub const INVALID_BODY: &str = "Invalid body";
pub const INVALID_ID: &str = "Id must be a positive number";

const CREATE_REQUIRED_FIELDS: &[&str] = &["title", "description"];
const UPDATE_ALLOWED_FIELDS: &[&str] = &["title", "description", "done"];

/// A failed structural check. Always renders as 400 + the uniform envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub message: String,
}

impl Rejection {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, self.message)
    }
}

/// The body must be a JSON object with at least one key.
pub fn validate_body(body: &JsonValue) -> Result<(), Rejection> {
    match body.as_object() {
        Some(object) if !object.is_empty() => Ok(()),
        _ => Err(Rejection::new(INVALID_BODY)),
    }
}

/// A create body must carry exactly the required fields: nothing missing,
/// nothing left over.
pub fn validate_new_todo(body: &JsonValue) -> Result<(), Rejection> {
    let object = body.as_object().ok_or_else(|| Rejection::new(INVALID_BODY))?;

    if let Some(message) = missing_fields(object, CREATE_REQUIRED_FIELDS) {
        return Err(Rejection { message });
    }
    if let Some(message) = extra_fields(object, CREATE_REQUIRED_FIELDS) {
        return Err(Rejection { message });
    }

    Ok(())
}

/// Parses the raw path id. Non-numeric input and values <= 0 are rejected by
/// the same check.
pub fn validate_id(raw: &str) -> Result<i64, Rejection> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Rejection::new(INVALID_ID)),
    }
}

/// Every key of an update body must belong to the allowed key set.
pub fn validate_todo_update(body: &JsonValue) -> Result<(), Rejection> {
    let object = body.as_object().ok_or_else(|| Rejection::new(INVALID_BODY))?;

    let unrecognized = object
        .keys()
        .any(|key| !UPDATE_ALLOWED_FIELDS.contains(&key.as_str()));
    if unrecognized {
        return Err(Rejection::new(INVALID_BODY));
    }

    Ok(())
}
