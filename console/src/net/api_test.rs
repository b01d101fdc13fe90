use super::*;

#[test]
fn endpoints_are_same_origin_paths() {
    let ep = endpoints();
    assert_eq!(ep.login(), "/api/auth/login");
    assert_eq!(ep.list(Resource::UserGroups), "/api/user-group/all");
    assert_eq!(ep.delete(Resource::Companies, "42"), "/companies/42");
}

#[test]
fn group_options_request_one_large_page() {
    let query = group_options_query();
    assert_eq!(query.page, 1);
    assert_eq!(query.limit, GROUP_OPTION_LIMIT);
    assert_eq!(query.name, "");
}

#[test]
fn auth_header_is_raw_token() {
    assert_eq!(auth_header(Some("abc.def")), Some("abc.def".to_owned()));
    assert_eq!(auth_header(Some("")), None);
    assert_eq!(auth_header(None), None);
}

#[test]
fn authed_calls_declare_json_even_without_body() {
    let headers = authed_headers(Some("tok"));
    assert!(headers.contains(&("Content-Type", "application/json".to_owned())));
    assert!(headers.contains(&("Authorization", "tok".to_owned())));

    let anonymous = authed_headers(None);
    assert_eq!(anonymous, vec![("Content-Type", "application/json".to_owned())]);
}

#[test]
fn abort_errors_are_recognised() {
    assert!(js_error("AbortError", "The user aborted a request.").is_aborted());
    assert_eq!(
        js_error("TypeError", "Failed to fetch"),
        ApiError::Transport("TypeError: Failed to fetch".to_owned())
    );
}

#[test]
fn users_cannot_be_deleted() {
    let result = block_on(delete(Resource::Users, "1"));
    assert!(matches!(result, Err(ApiError::Transport(msg)) if msg.contains("users")));
}

/// Poll a future that never awaits anything pending.
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
