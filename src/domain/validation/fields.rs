//! Field-set checks on raw request bodies.
//!
//! These are pure functions over the body's key set; value types are the
//! schema layer's business. A key present with an empty-string value counts
//! as present.

use serde_json::Map;
use serde_json::Value as JsonValue;

/// Required keys absent from `received`, in required-declaration order.
/// `None` when nothing is missing.
pub fn missing_fields(received: &Map<String, JsonValue>, required: &[&str]) -> Option<String> {
    let missing: Vec<&str> = required
        .iter()
        .filter(|field| !received.contains_key(**field))
        .copied()
        .collect();

    if missing.is_empty() {
        return None;
    }

    Some(format!("Missing fields: {}", missing.join(", ")))
}

/// Keys of `received` not in `allowed`, in the order they appear in the body.
/// `None` when nothing is left over.
pub fn extra_fields(received: &Map<String, JsonValue>, allowed: &[&str]) -> Option<String> {
    let leftover: Vec<&str> = received
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .map(|key| key.as_str())
        .collect();

    if leftover.is_empty() {
        return None;
    }

    Some(format!("Left over fields: {}", leftover.join(", ")))
}
