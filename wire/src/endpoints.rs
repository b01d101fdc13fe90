//! Central catalogue of backend endpoints.
//!
//! Every URL the console, host, or CLI builds comes from [`Endpoints`], so a
//! backend move is a single configuration change. The browser uses an empty
//! base (same origin, forwarded by the host); the CLI and host use the full
//! backend base URL.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped inside a single path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Entity collections exposed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Companies,
    UserGroups,
    Users,
}

impl Resource {
    pub const ALL: [Self; 3] = [Self::Companies, Self::UserGroups, Self::Users];

    /// Path segment used by the backend (`/api/{segment}/...`).
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Companies => "companies",
            Self::UserGroups => "user-group",
            Self::Users => "users",
        }
    }

    /// Whether the backend exposes a delete for this collection.
    #[must_use]
    pub fn deletable(self) -> bool {
        !matches!(self, Self::Users)
    }

    /// Parse a resource from its segment or a friendly alias.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "companies" | "company" => Some(Self::Companies),
            "user-group" | "user-groups" | "usergroups" | "groups" => Some(Self::UserGroups),
            "users" | "user" => Some(Self::Users),
            _ => None,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}

/// Query parameters of a list request. `name` is always sent, possibly empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub limit: u64,
    pub name: String,
}

impl ListQuery {
    #[must_use]
    pub fn new(page: u64, limit: u64, name: impl Into<String>) -> Self {
        Self { page: page.max(1), limit: limit.max(1), name: name.into() }
    }

    /// `page`, `limit`, `name` pairs, ready for `reqwest`/`gloo-net` `.query()`.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, String); 3] {
        [
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("name", self.name.clone()),
        ]
    }
}

/// URL builder for every backend endpoint the console consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Build from a base URL. A bare host gets `http://`; trailing slashes are
    /// dropped; an empty base yields origin-relative paths.
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self { base: normalize_base_url(base) }
    }

    /// Origin-relative endpoints (browser talking to its own host).
    #[must_use]
    pub fn same_origin() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    #[must_use]
    pub fn login(&self) -> String {
        self.url("/api/auth/login")
    }

    #[must_use]
    pub fn reset_password(&self, token: &str) -> String {
        self.url(&format!("/reset-password/{}", encode_segment(token)))
    }

    #[must_use]
    pub fn list(&self, resource: Resource) -> String {
        self.url(&format!("/api/{}/all", resource.segment()))
    }

    #[must_use]
    pub fn detail(&self, resource: Resource, id: &str) -> String {
        self.url(&format!("/api/{}/{}", resource.segment(), encode_segment(id)))
    }

    #[must_use]
    pub fn save(&self, resource: Resource) -> String {
        self.url(&format!("/api/{}/save", resource.segment()))
    }

    /// Delete path. The backend serves deletes outside `/api`.
    #[must_use]
    pub fn delete(&self, resource: Resource, id: &str) -> String {
        self.url(&format!("/{}/{}", resource.segment(), encode_segment(id)))
    }

    #[must_use]
    pub fn meet_login(&self) -> String {
        self.url("/api/meet/login")
    }

    #[must_use]
    pub fn meet_create(&self) -> String {
        self.url("/api/meet/create")
    }

    #[must_use]
    pub fn meet_join(&self) -> String {
        self.url("/api/meet/join")
    }
}

/// Normalize a configured base URL (`host:port`, `http://host/`, ...).
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("http://{trimmed}")
    }
}

/// Percent-encode one path segment.
#[must_use]
pub fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;
