use super::*;

#[test]
fn api_error_status_only_for_http_responses() {
    let err = ApiError::Status { status: 404, body: "missing".to_owned() };
    assert_eq!(err.status(), Some(404));
    assert_eq!(ApiError::Transport("offline".to_owned()).status(), None);
}

#[test]
fn api_error_messages() {
    assert_eq!(
        ApiError::Status { status: 500, body: String::new() }.to_string(),
        "server responded with status 500"
    );
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
    assert!(ApiError::Aborted.is_aborted());
    assert!(!ApiError::Decode("x".to_owned()).is_aborted());
}
