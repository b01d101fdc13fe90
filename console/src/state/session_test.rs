use super::*;

fn session(token: &str, name: &str) -> Session {
    Session { token: token.to_owned(), user: SessionUser { name: name.to_owned(), ..SessionUser::default() } }
}

#[test]
fn default_is_unloaded_and_anonymous() {
    let state = SessionState::default();
    assert!(!state.loaded);
    assert!(!state.is_authenticated());
    assert_eq!(state.display_name(), None);
}

#[test]
fn sign_in_then_out() {
    let mut state = SessionState::default();
    state.sign_in(session("abc", "Ana"));
    assert!(state.loaded);
    assert!(state.is_authenticated());
    assert_eq!(state.display_name(), Some("Ana"));

    state.sign_out();
    assert!(state.loaded);
    assert!(!state.is_authenticated());
}

#[test]
fn empty_token_is_not_authenticated() {
    let state = SessionState::restored(Some(session("", "Ana")));
    assert!(!state.is_authenticated());
}

#[test]
fn blank_name_has_no_display_name() {
    let state = SessionState::restored(Some(session("abc", "")));
    assert_eq!(state.display_name(), None);
}
