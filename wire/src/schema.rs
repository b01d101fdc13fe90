//! Form schemas and field-level validation.
//!
//! A [`Schema`] is an ordered list of [`FieldSpec`]s, each carrying the checks
//! that gate submission. Validation is pure: it maps the current
//! [`FormValues`] to [`FieldErrors`] (first failing check per field), so the
//! console can re-run it on every keystroke and the CLI can reuse it before
//! sending anything.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Current text of every field, keyed by field name.
pub type FormValues = BTreeMap<String, String>;
/// First error message per invalid field, keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

static LETTERS_ONLY: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").ok());
static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$").ok());
static DIGITS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+$").ok());

/// Input widget for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    /// Choice among the user groups returned by the backend.
    GroupSelect,
}

impl FieldKind {
    /// HTML `type` attribute for `<input>` kinds.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text | Self::GroupSelect => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
        }
    }
}

/// A single validation check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// `^[A-Za-z\s]+$`
    LettersOnly,
    Email,
    Digits,
    MinLen(usize),
    /// Value must equal the value of the named field.
    Matches(&'static str),
}

impl Rule {
    fn default_message(&self) -> String {
        match self {
            Self::Required => "This field is required".to_owned(),
            Self::LettersOnly => "The name must contain only letters".to_owned(),
            Self::Email => "Please enter a valid email address".to_owned(),
            Self::Digits => "Must be a whole number".to_owned(),
            Self::MinLen(n) => format!("Password must be at least {n} characters long"),
            Self::Matches(_) => "Passwords do not match".to_owned(),
        }
    }

    fn passes(&self, value: &str, values: &FormValues) -> bool {
        match self {
            Self::Required => !value.trim().is_empty(),
            Self::LettersOnly => LETTERS_ONLY.as_ref().is_some_and(|re| re.is_match(value)),
            Self::Email => is_email(value),
            Self::Digits => DIGITS.as_ref().is_some_and(|re| re.is_match(value.trim())),
            Self::MinLen(n) => value.chars().count() >= *n,
            Self::Matches(other) => values.get(*other).map_or("", String::as_str) == value,
        }
    }
}

/// Email shape check: a local part that neither starts with `.` nor contains
/// `..`, an `@`, and a dotted domain ending in a 2+ letter TLD.
#[must_use]
pub fn is_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL.as_ref().is_some_and(|re| re.is_match(value))
}

/// A rule plus the message shown when it fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check {
    pub rule: Rule,
    pub message: String,
}

/// One form field: identity, presentation hints, and checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub checks: Vec<Check>,
}

impl FieldSpec {
    #[must_use]
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, placeholder: label, kind, checks: Vec::new() }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Append a check with its default message.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        let message = rule.default_message();
        self.checks.push(Check { rule, message });
        self
    }

    /// Append a check with a custom message.
    #[must_use]
    pub fn rule_msg(mut self, rule: Rule, message: &str) -> Self {
        self.checks.push(Check { rule, message: message.to_owned() });
        self
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.checks.iter().any(|c| c.rule == Rule::Required)
    }

    /// First failing check's message for this field, if any.
    #[must_use]
    pub fn validate(&self, values: &FormValues) -> Option<String> {
        let value = values.get(self.name).map_or("", String::as_str);
        self.checks
            .iter()
            .find(|check| !check.rule.passes(value, values))
            .map(|check| check.message.clone())
    }
}

/// Ordered set of fields making up one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    #[must_use]
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Errors for every invalid field.
    #[must_use]
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        self.fields
            .iter()
            .filter_map(|field| field.validate(values).map(|msg| (field.name.to_owned(), msg)))
            .collect()
    }

    #[must_use]
    pub fn is_valid(&self, values: &FormValues) -> bool {
        self.fields.iter().all(|field| field.validate(values).is_none())
    }

    /// A value map with every field present and empty.
    #[must_use]
    pub fn blank_values(&self) -> FormValues {
        self.fields.iter().map(|f| (f.name.to_owned(), String::new())).collect()
    }
}

/// Trimmed value of `field`, empty when absent.
#[must_use]
pub fn value(values: &FormValues, field: &str) -> String {
    values.get(field).map(|v| v.trim().to_owned()).unwrap_or_default()
}

/// Trimmed value of `field`, `None` when absent or blank.
#[must_use]
pub fn non_empty(values: &FormValues, field: &str) -> Option<String> {
    let v = value(values, field);
    (!v.is_empty()).then_some(v)
}

// =============================================================================
// NAMED SCHEMAS
// =============================================================================

/// Minimum password length on registration forms.
pub const REGISTER_PASSWORD_MIN: usize = 6;
/// Minimum password length on the login form.
pub const LOGIN_PASSWORD_MIN: usize = 5;

fn password_pair() -> [FieldSpec; 2] {
    [
        FieldSpec::new("password", "Password", FieldKind::Password)
            .rule(Rule::Required)
            .rule(Rule::MinLen(REGISTER_PASSWORD_MIN)),
        FieldSpec::new("confirmationPassword", "Confirm Password", FieldKind::Password)
            .rule(Rule::Required)
            .rule(Rule::MinLen(REGISTER_PASSWORD_MIN))
            .rule(Rule::Matches("password")),
    ]
}

#[must_use]
pub fn company_add() -> Schema {
    let [password, confirmation] = password_pair();
    Schema::new(vec![
        FieldSpec::new("name", "Name", FieldKind::Text)
            .placeholder("Enter name*")
            .rule(Rule::LettersOnly),
        FieldSpec::new("leaderName", "Leader name", FieldKind::Text),
        FieldSpec::new("email", "Email", FieldKind::Email).rule(Rule::Email),
        password,
        confirmation,
    ])
}

#[must_use]
pub fn company_edit() -> Schema {
    Schema::new(vec![
        FieldSpec::new("name", "Name", FieldKind::Text)
            .placeholder("Enter company name*")
            .rule(Rule::LettersOnly),
        FieldSpec::new("member_cnt", "Member count", FieldKind::Number)
            .rule(Rule::Required)
            .rule(Rule::Digits),
    ])
}

#[must_use]
pub fn user_group_add() -> Schema {
    Schema::new(vec![
        FieldSpec::new("name", "Name", FieldKind::Text)
            .placeholder("Enter user group name*")
            .rule(Rule::LettersOnly),
    ])
}

#[must_use]
pub fn user_group_edit() -> Schema {
    user_group_add()
}

#[must_use]
pub fn user_add() -> Schema {
    let [password, confirmation] = password_pair();
    Schema::new(vec![
        FieldSpec::new("name", "Name", FieldKind::Text).placeholder("Enter name*"),
        FieldSpec::new("userGroup", "User group", FieldKind::GroupSelect)
            .rule_msg(Rule::Required, "Select a user group"),
        FieldSpec::new("email", "Email", FieldKind::Email).rule(Rule::Email),
        password,
        confirmation,
    ])
}

#[must_use]
pub fn user_edit() -> Schema {
    Schema::new(vec![
        FieldSpec::new("name", "Name", FieldKind::Text).rule(Rule::Required),
        FieldSpec::new("email", "Email", FieldKind::Email).rule(Rule::Email),
    ])
}

#[must_use]
pub fn login() -> Schema {
    Schema::new(vec![
        FieldSpec::new("email", "Email", FieldKind::Email)
            .placeholder("Email or Registration Number")
            .rule_msg(Rule::Required, "Email is required")
            .rule_msg(Rule::Email, "Invalid email"),
        FieldSpec::new("password", "Password", FieldKind::Password)
            .rule_msg(Rule::Required, "Password is required")
            .rule(Rule::MinLen(LOGIN_PASSWORD_MIN)),
    ])
}

#[must_use]
pub fn reset_password() -> Schema {
    Schema::new(vec![
        FieldSpec::new("newPassword", "New Password", FieldKind::Password)
            .placeholder("Enter new password")
            .rule(Rule::Required),
    ])
}

fn required(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec::new(name, label, kind).rule(Rule::Required)
}

#[must_use]
pub fn meet_login() -> Schema {
    Schema::new(vec![
        required("email", "Email", FieldKind::Email),
        required("password", "Password", FieldKind::Password),
    ])
}

#[must_use]
pub fn meet_create() -> Schema {
    Schema::new(vec![
        required("email", "Email", FieldKind::Email),
        required("password", "Password", FieldKind::Password),
        required("meeting_type", "Meeting Type", FieldKind::Text),
    ])
}

#[must_use]
pub fn meet_join() -> Schema {
    Schema::new(vec![
        required("email", "Email", FieldKind::Email),
        required("password", "Password", FieldKind::Password),
        required("meeting_id", "Meeting ID", FieldKind::Text),
        required("meeting_url", "Meeting URL", FieldKind::Text),
        required("meeting_passcode", "Meeting Passcode", FieldKind::Text),
    ])
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;
