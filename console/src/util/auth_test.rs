use super::*;
use crate::state::session::Session;

#[test]
fn should_redirect_unauth_when_loaded_and_signed_out() {
    let state = SessionState::restored(None);
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_before_storage_is_read() {
    assert!(!should_redirect_unauth(&SessionState::default()));
}

#[test]
fn should_not_redirect_when_signed_in() {
    let state = SessionState::restored(Some(Session {
        token: "tok".to_owned(),
        user: wire::SessionUser { name: "Alice".to_owned(), ..wire::SessionUser::default() },
    }));
    assert!(!should_redirect_unauth(&state));
}
