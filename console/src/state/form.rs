//! Form model: values, validation errors, and touched tracking.
//!
//! Validation re-runs on every change. Errors are always computed so the
//! submit button can be disabled, but a field only shows its message after
//! the operator has touched it (or tried to submit).

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeSet;

use wire::{FieldErrors, FormValues, Schema};

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub schema: Schema,
    pub values: FormValues,
    pub errors: FieldErrors,
    pub touched: BTreeSet<String>,
    pub submitting: bool,
}

impl FormState {
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        let values = schema.blank_values();
        let errors = schema.validate(&values);
        Self { schema, values, errors, touched: BTreeSet::new(), submitting: false }
    }

    /// Operator edit: store, mark touched, revalidate.
    pub fn set(&mut self, field: &str, value: String) {
        self.values.insert(field.to_owned(), value);
        self.touched.insert(field.to_owned());
        self.revalidate();
    }

    /// Programmatic fill (edit pages). Fields are not marked touched.
    pub fn prefill(&mut self, values: FormValues) {
        for (field, value) in values {
            if self.schema.field(&field).is_some() {
                self.values.insert(field, value);
            }
        }
        self.revalidate();
    }

    /// Back to blank, as on the API-testing "Init" button.
    pub fn clear(&mut self) {
        *self = Self::new(self.schema.clone());
    }

    /// Reveal every error, used when a submit is attempted early.
    pub fn touch_all(&mut self) {
        self.touched = self.schema.fields.iter().map(|f| f.name.to_owned()).collect();
    }

    #[must_use]
    pub fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    /// Message to render under `field`, if any.
    #[must_use]
    pub fn visible_error(&self, field: &str) -> Option<String> {
        if !self.touched.contains(field) {
            return None;
        }
        self.errors.get(field).cloned()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    /// Input class reflecting validation state.
    #[must_use]
    pub fn input_class(&self, field: &str) -> &'static str {
        if self.visible_error(field).is_some() {
            "form-input form-input--error"
        } else if self.touched.contains(field) && !self.value(field).is_empty() {
            "form-input form-input--ok"
        } else {
            "form-input"
        }
    }

    fn revalidate(&mut self) {
        self.errors = self.schema.validate(&self.values);
    }
}
