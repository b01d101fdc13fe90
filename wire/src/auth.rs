//! `Authorization` header policy and session storage keys.
//!
//! The backend is called with the bare access token as the header value.
//! Whether it actually expects `Bearer <token>` is unconfirmed, so the scheme
//! is explicit at every call site instead of being hardcoded.

/// `localStorage` key holding the raw access token.
pub const TOKEN_STORAGE_KEY: &str = "access_token";
/// `localStorage` key holding the signed-in user as JSON.
pub const USER_STORAGE_KEY: &str = "user";

/// How the access token is placed in the `Authorization` header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: <token>`
    #[default]
    Raw,
    /// `Authorization: Bearer <token>`
    Bearer,
}

impl AuthScheme {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "raw" | "" => Some(Self::Raw),
            "bearer" => Some(Self::Bearer),
            _ => None,
        }
    }
}

/// Header value for `token` under `scheme`.
#[must_use]
pub fn authorization_value(scheme: AuthScheme, token: &str) -> String {
    match scheme {
        AuthScheme::Raw => token.to_owned(),
        AuthScheme::Bearer => format!("Bearer {token}"),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
