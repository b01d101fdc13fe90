use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::any;
use serde_json::json;

use super::*;

async fn echo(method: Method, uri: Uri, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if uri.path() == "/api/auth/login" {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "bad credentials" })));
    }
    let auth = headers.get("authorization").and_then(|v| v.to_str().ok()).map(str::to_owned);
    if uri.path() == "/api/meet/login" {
        // Echo the header back through a field the response type keeps.
        return (StatusCode::OK, Json(json!({ "google_api_key": auth })));
    }
    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok()).map(str::to_owned);
    (
        StatusCode::OK,
        Json(json!({ "method": method.as_str(), "path": uri.path(), "query": uri.query(), "auth": auth, "content_type": content_type })),
    )
}

async fn backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().fallback(any(echo))).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn list_sends_query_and_raw_token() {
    let client = ApiClient::new(&backend().await, Some("tok".to_owned()), AuthScheme::Raw);
    let seen = client.list(Resource::UserGroups, &ListQuery::new(2, 5, "")).await.unwrap();
    assert_eq!(seen["path"], "/api/user-group/all");
    assert_eq!(seen["query"], "page=2&limit=5&name=");
    assert_eq!(seen["auth"], "tok");
}

#[tokio::test]
async fn bearer_scheme_prefixes_header() {
    let client = ApiClient::new(&backend().await, Some("tok".to_owned()), AuthScheme::Bearer);
    let seen = client.get(Resource::Companies, "42").await.unwrap();
    assert_eq!(seen["path"], "/api/companies/42");
    assert_eq!(seen["auth"], "Bearer tok");
}

#[tokio::test]
async fn group_delete_uses_top_level_path() {
    let client = ApiClient::new(&backend().await, Some("tok".to_owned()), AuthScheme::Raw);
    let seen = client.delete(Resource::UserGroups, "9").await.unwrap();
    assert_eq!(seen["method"], "DELETE");
    assert_eq!(seen["path"], "/user-group/9");
}

#[tokio::test]
async fn user_delete_is_refused_locally() {
    // Unroutable base: the call must fail before any request is made.
    let client = ApiClient::new("http://127.0.0.1:9", Some("tok".to_owned()), AuthScheme::Raw);
    let err = client.delete(Resource::Users, "1").await.unwrap_err();
    assert!(matches!(err, CliError::NotDeletable(Resource::Users)));
}

#[tokio::test]
async fn authed_calls_need_a_token() {
    let client = ApiClient::new(&backend().await, Some("  ".to_owned()), AuthScheme::Raw);
    assert!(matches!(client.get(Resource::Users, "1").await, Err(CliError::MissingToken)));
}

#[tokio::test]
async fn non_success_status_keeps_body() {
    let client = ApiClient::new(&backend().await, None, AuthScheme::Raw);
    let request = wire::LoginRequest { email: "a@b.co".to_owned(), password: "wrong".to_owned() };
    match client.login(&request).await {
        Err(CliError::Status { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("bad credentials"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn meet_calls_carry_configured_token() {
    let base = backend().await;
    let request = wire::MeetLoginRequest { email: "a@b.co".to_owned(), password: "secret".to_owned() };

    let client = ApiClient::new(&base, Some("tok".to_owned()), AuthScheme::Raw);
    let seen = client.meet_login(&request).await.unwrap();
    assert_eq!(seen.google_api_key.as_deref(), Some("tok"));

    let anonymous = ApiClient::new(&base, None, AuthScheme::Raw);
    let seen = anonymous.meet_login(&request).await.unwrap();
    assert_eq!(seen.google_api_key, None);
}

#[tokio::test]
async fn authed_get_declares_json_content_type() {
    let client = ApiClient::new(&backend().await, Some("tok".to_owned()), AuthScheme::Raw);
    let seen = client.get(Resource::Users, "3").await.unwrap();
    assert_eq!(seen["content_type"], "application/json");
}
