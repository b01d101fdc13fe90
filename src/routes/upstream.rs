//! Forwarding of backend API paths to `API_BASE_URL`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this origin. Requests under `/api/` plus
//! the handful of backend paths that live outside it (entity deletes,
//! password reset) are replayed against the backend with the same method,
//! query string, body, and `Authorization`/`Content-Type`/`Accept` headers.
//! The backend's status and body come back unchanged.

#[cfg(test)]
#[path = "upstream_test.rs"]
mod upstream_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const FORWARDED_HEADERS: [axum::http::HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

/// Replay the incoming request against the backend.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let target = state.upstream.target_url(&uri);
    let mut request = state.upstream.client.request(method.clone(), &target);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    match request.send().await {
        Ok(resp) => {
            tracing::debug!(%method, upstream = %target, status = resp.status().as_u16(), "forwarded");
            relay(resp).await
        }
        Err(e) => {
            tracing::warn!(%method, upstream = %target, error = %e, "upstream request failed");
            upstream_error(&e).into_response()
        }
    }
}

fn upstream_error(err: &reqwest::Error) -> (StatusCode, &'static str) {
    if err.is_timeout() {
        (StatusCode::GATEWAY_TIMEOUT, "upstream timed out")
    } else {
        (StatusCode::BAD_GATEWAY, "upstream unavailable")
    }
}

async fn relay(resp: reqwest::Response) -> Response {
    let status = resp.status();
    let content_type = resp.headers().get(CONTENT_TYPE).cloned();
    let bytes = match resp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "upstream body read failed");
            return upstream_error(&e).into_response();
        }
    };

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}
