use serde_json::json;

use super::*;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[test]
fn parse_object_rejects_arrays() {
    assert!(matches!(parse_object("[1,2]"), Err(CliError::NotAnObject)));
    assert!(matches!(parse_object("{nope"), Err(CliError::InvalidJson(_))));
    assert_eq!(parse_object(r#"{"name":"Acme"}"#).unwrap().len(), 1);
}

#[test]
fn id_selects_edit_schema() {
    let edit = object(json!({ "id": "7", "name": "Acme", "member_cnt": 12 }));
    assert!(save_schema(Resource::Companies, &edit).field("member_cnt").is_some());
    assert!(check(&save_schema(Resource::Companies, &edit), &edit).is_ok());

    let add = object(json!({ "name": "Acme" }));
    assert!(save_schema(Resource::Companies, &add).field("leaderName").is_some());
}

#[test]
fn numbers_are_checked_as_text() {
    let values = form_values(&object(json!({ "member_cnt": 12, "nested": { "a": 1 } })));
    assert_eq!(values.get("member_cnt").map(String::as_str), Some("12"));
    assert!(!values.contains_key("nested"));
}

#[test]
fn invalid_group_name_is_reported_per_field() {
    let payload = object(json!({ "name": "Team 2" }));
    let err = check(&save_schema(Resource::UserGroups, &payload), &payload).unwrap_err();
    assert_eq!(err.to_string(), "invalid payload: name: The name must contain only letters");
}

#[test]
fn user_add_needs_matching_passwords() {
    let payload = object(json!({
        "name": "Nakao",
        "userGroup": "Sales",
        "email": "nakao@company.mail",
        "password": "secret1",
        "confirmationPassword": "secret2",
    }));
    let err = check(&save_schema(Resource::Users, &payload), &payload).unwrap_err();
    assert!(err.to_string().contains("confirmationPassword: Passwords do not match"));
}
