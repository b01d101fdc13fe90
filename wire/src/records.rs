//! Backend records and request/response DTOs.
//!
//! DESIGN
//! ======
//! Field names follow the backend JSON exactly (`member_cnt`, `leader_user`,
//! `leaderName`, `confirmationPassword`, ...) via serde renames, while the
//! Rust side uses descriptive names. Reads are lenient: ids may arrive as
//! strings or numbers and text fields read `null` or absence as empty, so a
//! partial record still renders. Writes skip absent optionals so an edit
//! only sends what the form owns.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// ENTITIES
// =============================================================================

/// Leader of a company as embedded in company records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderUser {
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub email: String,
}

/// A company row from `GET /api/companies/all` or `/api/companies/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub name: String,
    #[serde(default)]
    pub leader_user: Option<LeaderUser>,
    #[serde(rename = "member_cnt", default, deserialize_with = "deserialize_count")]
    pub member_count: u64,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub updated_at: String,
}

/// A user group row. The owning company is surfaced by name only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub company_name: String,
    #[serde(rename = "member_cnt", default, deserialize_with = "deserialize_count")]
    pub member_count: u64,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub updated_at: String,
}

/// A user row, belonging to a company and a user group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub company_name: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub user_group_name: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub role: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub updated_at: String,
}

// =============================================================================
// LIST ENVELOPE
// =============================================================================

/// Paging metadata returned next to every list page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_pages: u64,
}

/// `{ data: T[], meta: { total, total_pages } }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: ListMeta,
}

// =============================================================================
// SAVE PAYLOADS (`POST {entity}/save`, create when `id` is absent)
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySave {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "leaderName", skip_serializing_if = "Option::is_none")]
    pub leader_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "confirmationPassword", skip_serializing_if = "Option::is_none")]
    pub confirmation_password: Option<String>,
    #[serde(rename = "member_cnt", skip_serializing_if = "Option::is_none")]
    pub member_count: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroupSave {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSave {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "userGroup", skip_serializing_if = "Option::is_none")]
    pub user_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "confirmationPassword", skip_serializing_if = "Option::is_none")]
    pub confirmation_password: Option<String>,
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signed-in operator profile. Unknown fields are kept so the stored copy
/// round-trips whatever the backend sends.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: SessionUser,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// MEETING HARNESS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetLoginResponse {
    #[serde(default)]
    pub google_api_key: Option<String>,
    #[serde(default)]
    pub zoom_api_key: Option<String>,
    #[serde(default)]
    pub teams_api_key: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetCreateRequest {
    pub email: String,
    pub password: String,
    pub meeting_type: String,
}

/// Meeting passcodes come back as either JSON strings or numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Passcode {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for Passcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetCreateResponse {
    #[serde(default)]
    pub meeting_type: Option<String>,
    #[serde(default)]
    pub meeting_url: Option<String>,
    #[serde(default)]
    pub meeting_id: Option<String>,
    #[serde(default)]
    pub meeting_passcode: Option<Passcode>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetJoinRequest {
    pub email: String,
    pub password: String,
    pub meeting_id: String,
    pub meeting_url: String,
    pub meeting_passcode: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetJoinResponse {
    #[serde(default)]
    pub start_meeting: Option<bool>,
}

// =============================================================================
// LENIENT DESERIALIZERS
// =============================================================================

fn id_from_value<E: serde::de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(Value::deserialize(deserializer)?)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        other => id_from_value(other),
    }
}

fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("expected non-negative integer, got {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {s:?}"))),
        other => Err(D::Error::custom(format!("expected count, got {other}"))),
    }
}

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;
