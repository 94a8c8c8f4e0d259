//! Declarative per-operation schemas for todo payloads.
//!
//! Each schema is an ordered rule table; rules are evaluated in declaration
//! order and the first violation wins. Messages are user-facing and
//! field-name-prefixed, e.g. `"title" is not allowed to be empty` or
//! `"done" must be one of [0, 1]` — consumers depend on this exact phrasing.

pub mod fields;

use serde_json::Value as JsonValue;
use std::fmt;

/// A schema violation. Always maps to HTTP 400 at the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy)]
enum Rule {
    /// A string field. `allow_empty` permits the empty string.
    Text { required: bool, allow_empty: bool },
    /// An integer field restricted to the listed values.
    OneOf { required: bool, allowed: &'static [i64] },
}

type Schema = &'static [(&'static str, Rule)];

const CREATE_SCHEMA: Schema = &[
    ("title", Rule::Text { required: true, allow_empty: false }),
    ("description", Rule::Text { required: true, allow_empty: true }),
    ("done", Rule::OneOf { required: false, allowed: &[0, 1] }),
];

const EDIT_SCHEMA: Schema = &[
    ("title", Rule::Text { required: false, allow_empty: false }),
    ("description", Rule::Text { required: false, allow_empty: true }),
    ("done", Rule::OneOf { required: false, allowed: &[0, 1] }),
];

/// Checks a create payload: `title` non-empty text, `description` text
/// (empty permitted), `done` optional 0/1.
pub fn validate_create(candidate: &JsonValue) -> Result<(), ValidationError> {
    check(CREATE_SCHEMA, candidate)
}

/// Checks an edit payload: all fields optional, same shapes as create.
pub fn validate_edit(candidate: &JsonValue) -> Result<(), ValidationError> {
    check(EDIT_SCHEMA, candidate)
}

fn check(schema: Schema, candidate: &JsonValue) -> Result<(), ValidationError> {
    let object = candidate.as_object().ok_or_else(|| ValidationError {
        message: "\"value\" must be of type object".to_string(),
    })?;

    for (name, rule) in schema {
        let value = object.get(*name);
        match rule {
            Rule::Text { required, allow_empty } => match value {
                None => {
                    if *required {
                        return violation(name, "is required");
                    }
                }
                Some(JsonValue::String(s)) => {
                    if s.is_empty() && !allow_empty {
                        return violation(name, "is not allowed to be empty");
                    }
                }
                Some(_) => return violation(name, "must be a string"),
            },
            Rule::OneOf { required, allowed } => match value {
                None => {
                    if *required {
                        return violation(name, "is required");
                    }
                }
                Some(JsonValue::Number(n)) => {
                    let in_range = n.as_i64().is_some_and(|v| allowed.contains(&v));
                    if !in_range {
                        let list = allowed
                            .iter()
                            .map(|v| v.to_string())
                            .collect::<Vec<_>>()
                            .join(", ");
                        return Err(ValidationError {
                            message: format!("\"{}\" must be one of [{}]", name, list),
                        });
                    }
                }
                Some(_) => return violation(name, "must be a number"),
            },
        }
    }

    Ok(())
}

fn violation(field: &str, description: &str) -> Result<(), ValidationError> {
    Err(ValidationError {
        message: format!("\"{}\" {}", field, description),
    })
}
