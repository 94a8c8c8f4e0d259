//! Unit coverage for the field-set validator, the per-operation schemas and
//! the gatekeeping guards. Message strings are pinned exactly: consumers
//! depend on this phrasing.

use serde_json::json;
use serde_json::Map;
use serde_json::Value as JsonValue;
use todo_api::domain::validation::fields::{extra_fields, missing_fields};
use todo_api::domain::validation::{validate_create, validate_edit};
use todo_api::transport::http::guards;

fn body(v: JsonValue) -> Map<String, JsonValue> {
    v.as_object().expect("test body must be an object").clone()
}

#[test]
fn missing_fields_follow_declaration_order() {
    let received = body(json!({ "description": "d" }));
    assert_eq!(
        missing_fields(&received, &["title", "description"]),
        Some("Missing fields: title".to_string())
    );

    let received = body(json!({ "other": 1 }));
    assert_eq!(
        missing_fields(&received, &["title", "description"]),
        Some("Missing fields: title, description".to_string())
    );
}

#[test]
fn empty_string_counts_as_present() {
    let received = body(json!({ "title": "", "description": "" }));
    assert_eq!(missing_fields(&received, &["title", "description"]), None);
}

#[test]
fn extra_fields_follow_body_order() {
    let received = body(json!({ "title": "t", "zeta": 1, "alpha": 2 }));
    assert_eq!(
        extra_fields(&received, &["title", "description"]),
        Some("Left over fields: zeta, alpha".to_string())
    );

    let received = body(json!({ "title": "t", "description": "d" }));
    assert_eq!(extra_fields(&received, &["title", "description"]), None);
}

#[test]
fn create_schema_rejects_empty_title() {
    let error = validate_create(&json!({ "title": "", "description": "d" })).unwrap_err();
    assert_eq!(error.message, "\"title\" is not allowed to be empty");
}

#[test]
fn create_schema_requires_title_and_description() {
    let error = validate_create(&json!({ "description": "d" })).unwrap_err();
    assert_eq!(error.message, "\"title\" is required");

    let error = validate_create(&json!({ "title": "t" })).unwrap_err();
    assert_eq!(error.message, "\"description\" is required");
}

#[test]
fn create_schema_checks_types_in_declaration_order() {
    let error = validate_create(&json!({ "title": 7, "description": false })).unwrap_err();
    assert_eq!(error.message, "\"title\" must be a string");
}

#[test]
fn create_schema_allows_empty_description() {
    assert!(validate_create(&json!({ "title": "t", "description": "" })).is_ok());
}

#[test]
fn edit_schema_fields_are_optional() {
    assert!(validate_edit(&json!({})).is_ok());
    assert!(validate_edit(&json!({ "done": 1 })).is_ok());
    assert!(validate_edit(&json!({ "title": "t", "description": "", "done": 0 })).is_ok());
}

#[test]
fn edit_schema_constrains_done_to_flag_values() {
    let error = validate_edit(&json!({ "done": 10 })).unwrap_err();
    assert_eq!(error.message, "\"done\" must be one of [0, 1]");

    let error = validate_edit(&json!({ "done": "yes" })).unwrap_err();
    assert_eq!(error.message, "\"done\" must be a number");
}

#[test]
fn edit_schema_rejects_empty_title() {
    let error = validate_edit(&json!({ "title": "" })).unwrap_err();
    assert_eq!(error.message, "\"title\" is not allowed to be empty");
}

#[test]
fn guard_validate_body_needs_a_non_empty_object() {
    assert!(guards::validate_body(&json!({ "title": "t" })).is_ok());

    let rejection = guards::validate_body(&json!({})).unwrap_err();
    assert_eq!(rejection.message, "Invalid body");

    let rejection = guards::validate_body(&json!("not an object")).unwrap_err();
    assert_eq!(rejection.message, "Invalid body");
}

#[test]
fn guard_validate_new_todo_reports_missing_then_extras() {
    let rejection = guards::validate_new_todo(&json!({ "title": "t" })).unwrap_err();
    assert_eq!(rejection.message, "Missing fields: description");

    let rejection =
        guards::validate_new_todo(&json!({ "title": "t", "description": "d", "done": 0 }))
            .unwrap_err();
    assert_eq!(rejection.message, "Left over fields: done");

    assert!(guards::validate_new_todo(&json!({ "title": "t", "description": "d" })).is_ok());
}

#[test]
fn guard_validate_id_accepts_only_positive_numbers() {
    assert_eq!(guards::validate_id("1").unwrap(), 1);
    assert_eq!(guards::validate_id("42").unwrap(), 42);

    for raw in ["0", "-3", "abc", "", "1.5"] {
        let rejection = guards::validate_id(raw).unwrap_err();
        assert_eq!(rejection.message, "Id must be a positive number", "raw={raw:?}");
    }
}

#[test]
fn guard_validate_todo_update_rejects_unknown_keys() {
    assert!(guards::validate_todo_update(&json!({ "title": "t", "done": 1 })).is_ok());

    let rejection = guards::validate_todo_update(&json!({ "fake": "key" })).unwrap_err();
    assert_eq!(rejection.message, "Invalid body");
}
