//! Signed-in operator session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` context by the root `App`. Route
//! guards wait for `loaded` before deciding to redirect, so a page refresh
//! does not bounce a signed-in operator to `/login` before storage is read.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use wire::SessionUser;

/// Token plus profile, as persisted under `access_token` / `user`.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// Storage has been read at least once on this page load.
    pub loaded: bool,
}

impl SessionState {
    /// State after reading persisted storage.
    #[must_use]
    pub fn restored(session: Option<Session>) -> Self {
        Self { session, loaded: true }
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.loaded = true;
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.loaded = true;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.token.is_empty())
    }

    /// Operator name for the header and home card.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|s| s.user.name.as_str())
            .filter(|name| !name.is_empty())
    }
}
