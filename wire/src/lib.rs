//! Shared records, endpoint catalogue, and form rules for the admin console.
//!
//! This crate owns everything the browser console, the host server, and the
//! `meetctl` CLI must agree on: the JSON shape of backend records, the paths
//! of every backend endpoint, the `Authorization` header policy, pagination
//! arithmetic, and the validation schemas gating each form. It has no
//! framework dependencies so all of it is testable natively.

pub mod auth;
pub mod display;
pub mod endpoints;
pub mod pagination;
pub mod records;
pub mod schema;

pub use auth::{AuthScheme, TOKEN_STORAGE_KEY, USER_STORAGE_KEY, authorization_value};
pub use endpoints::{Endpoints, ListQuery, Resource};
pub use pagination::{PAGE_SIZE, Pager, total_pages_for};
pub use records::*;
pub use schema::{FieldErrors, FieldKind, FieldSpec, FormValues, Rule, Schema};

/// Error returned by REST helpers that talk to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, aborted, CORS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request was superseded or its view went away before it resolved.
    #[error("request aborted")]
    Aborted,
    /// The call is only meaningful in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` when the caller should stay silent (superseded request).
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;
