//! Pre-flight checks for `save` and `login`, using the same schemas as the
//! console forms.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde_json::{Map, Value};
use wire::{FieldErrors, FormValues, Resource, Schema, schema};

use crate::CliError;

/// Parse `--data` into a JSON object.
pub fn parse_object(raw: &str) -> Result<Map<String, Value>, CliError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::NotAnObject),
    }
}

/// Schema for a save: the edit form when `id` is present, else the add form.
#[must_use]
pub fn save_schema(resource: Resource, payload: &Map<String, Value>) -> Schema {
    let editing = payload.get("id").is_some_and(|id| !id.is_null());
    match (resource, editing) {
        (Resource::Companies, false) => schema::company_add(),
        (Resource::Companies, true) => schema::company_edit(),
        (Resource::UserGroups, false) => schema::user_group_add(),
        (Resource::UserGroups, true) => schema::user_group_edit(),
        (Resource::Users, false) => schema::user_add(),
        (Resource::Users, true) => schema::user_edit(),
    }
}

/// Flatten scalar JSON values to the text a form field would hold.
#[must_use]
pub fn form_values(payload: &Map<String, Value>) -> FormValues {
    payload
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.clone(), text))
        })
        .collect()
}

/// Validate `payload` against `schema`.
pub fn check(schema: &Schema, payload: &Map<String, Value>) -> Result<(), CliError> {
    let errors = schema.validate(&form_values(payload));
    if errors.is_empty() { Ok(()) } else { Err(CliError::Invalid(render_errors(&errors))) }
}

fn render_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}
