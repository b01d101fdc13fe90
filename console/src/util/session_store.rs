//! Browser `localStorage` access for the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place that touches the persisted token and profile. The token is
//! stored as a bare string under `access_token` and the profile as JSON under
//! `user`, matching what other tools sharing the origin expect.

use wire::{SessionUser, TOKEN_STORAGE_KEY, USER_STORAGE_KEY};

use crate::state::session::Session;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persisted session, if both keys are present and the token is non-empty.
pub fn read() -> Option<Session> {
    let token = token()?;
    let user = read_user().unwrap_or_default();
    Some(Session { token, user })
}

/// Raw access token.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
        (!raw.is_empty()).then_some(raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = TOKEN_STORAGE_KEY;
        None
    }
}

fn read_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(USER_STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = USER_STORAGE_KEY;
        None
    }
}

/// Persist a fresh login.
pub fn write(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        if storage.set_item(TOKEN_STORAGE_KEY, &session.token).is_err() {
            log::warn!("session store: could not persist access token");
        }
        let Ok(raw) = serde_json::to_string(&session.user) else {
            return;
        };
        if storage.set_item(USER_STORAGE_KEY, &raw).is_err() {
            log::warn!("session store: could not persist user profile");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Forget the session (logout, or a 401 from the backend).
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        let _ = storage.remove_item(USER_STORAGE_KEY);
    }
}
