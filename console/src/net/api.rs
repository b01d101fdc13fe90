//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. Non-2xx responses
//! carry their status and body; an aborted fetch maps to
//! `ApiError::Aborted` so superseded list requests can be ignored quietly.
//!
//! AUTH
//! ====
//! Authenticated calls read the token from the session store on every request
//! and send it as the bare `Authorization` header value.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use wire::{
    ApiError, ListEnvelope, ListQuery, LoginResponse, MeetCreateRequest, MeetCreateResponse, MeetJoinRequest,
    MeetJoinResponse, MeetLoginRequest, MeetLoginResponse, Resource, ResetPasswordResponse, UserGroup,
};
#[cfg(any(test, feature = "hydrate"))]
use wire::{AuthScheme, Endpoints, authorization_value};

use crate::util::abort::AbortHandle;

/// User-group choices offered on the add-user form.
pub const GROUP_OPTION_LIMIT: u64 = 100;

#[cfg(any(test, feature = "hydrate"))]
fn endpoints() -> Endpoints {
    Endpoints::same_origin()
}

#[cfg(any(test, feature = "hydrate"))]
fn group_options_query() -> ListQuery {
    ListQuery::new(1, GROUP_OPTION_LIMIT, "")
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(|t| authorization_value(AuthScheme::Raw, t))
}

/// Headers attached to every authenticated call.
#[cfg(any(test, feature = "hydrate"))]
fn authed_headers(token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_owned())];
    if let Some(value) = auth_header(token) {
        headers.push(("Authorization", value));
    }
    headers
}

/// Classify a browser fetch failure by its `DOMException` name.
#[cfg(any(test, feature = "hydrate"))]
fn js_error(name: &str, message: &str) -> ApiError {
    if name == "AbortError" {
        ApiError::Aborted
    } else {
        ApiError::Transport(format!("{name}: {message}"))
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use wire::ApiError;

    use crate::util::session_store;

    pub(super) fn transport(err: gloo_net::Error) -> ApiError {
        match err {
            gloo_net::Error::JsError(js) => super::js_error(&js.name, &js.message),
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }

    pub(super) fn authed(builder: RequestBuilder) -> RequestBuilder {
        super::authed_headers(session_store::token().as_deref())
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, &value))
    }

    async fn checked(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("api: {} responded {status}", resp.url());
        Err(ApiError::Status { status, body })
    }

    pub(super) async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = builder.send().await.map_err(transport)?;
        let resp = checked(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn post_json<B: Serialize, T: DeserializeOwned>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = builder.json(body).map_err(transport)?.send().await.map_err(transport)?;
        let resp = checked(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn post_discard<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<(), ApiError> {
        let resp = builder.json(body).map_err(transport)?.send().await.map_err(transport)?;
        checked(resp).await.map(|_| ())
    }

    pub(super) async fn send_discard(builder: RequestBuilder) -> Result<(), ApiError> {
        let resp = builder.send().await.map_err(transport)?;
        checked(resp).await.map(|_| ())
    }
}

/// Exchange credentials for a session via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Status` when the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = wire::LoginRequest { email: email.to_owned(), password: password.to_owned() };
        http::post_json(gloo_net::http::Request::post(&endpoints().login()), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Set a new password with a reset token via `POST /reset-password/{token}`.
///
/// # Errors
///
/// Returns an error when the token is rejected or the request fails.
pub async fn reset_password(token: &str, new_password: &str) -> Result<ResetPasswordResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = wire::ResetPasswordRequest { new_password: new_password.to_owned() };
        http::post_json(gloo_net::http::Request::post(&endpoints().reset_password(token)), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, new_password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one list page via `GET /api/{resource}/all?page=&limit=&name=`.
///
/// # Errors
///
/// Returns `ApiError::Aborted` when `abort` fires first.
pub async fn fetch_page<T: DeserializeOwned>(
    resource: Resource,
    query: &ListQuery,
    abort: &AbortHandle,
) -> Result<ListEnvelope<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let signal = abort.signal();
        let builder = gloo_net::http::Request::get(&endpoints().list(resource))
            .query(query.pairs())
            .abort_signal(signal.as_ref());
        http::send_json(http::authed(builder)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, query, abort);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single record via `GET /api/{resource}/{id}`.
///
/// # Errors
///
/// Returns `ApiError::Aborted` when `abort` fires first.
pub async fn fetch_one<T: DeserializeOwned>(resource: Resource, id: &str, abort: &AbortHandle) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let signal = abort.signal();
        let builder = gloo_net::http::Request::get(&endpoints().detail(resource, id)).abort_signal(signal.as_ref());
        http::send_json(http::authed(builder)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, id, abort);
        Err(ApiError::Unavailable)
    }
}

/// Choices for the user-group select on the add-user form.
///
/// # Errors
///
/// Returns an error if the list request fails.
pub async fn fetch_group_options() -> Result<Vec<UserGroup>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let page = fetch_page::<UserGroup>(Resource::UserGroups, &group_options_query(), &AbortHandle::new()).await?;
        Ok(page.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create (no `id`) or update (with `id`) via `POST /api/{resource}/save`.
///
/// # Errors
///
/// Returns `ApiError::Status` when the backend rejects the payload.
pub async fn save<B: serde::Serialize>(resource: Resource, payload: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::authed(gloo_net::http::Request::post(&endpoints().save(resource)));
        http::post_discard(builder, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, payload);
        Err(ApiError::Unavailable)
    }
}

/// Remove a record via `DELETE /{resource}/{id}`.
///
/// # Errors
///
/// Returns an error for non-deletable resources or a failed request.
pub async fn delete(resource: Resource, id: &str) -> Result<(), ApiError> {
    if !resource.deletable() {
        return Err(ApiError::Transport(format!("{resource} cannot be deleted")));
    }
    #[cfg(feature = "hydrate")]
    {
        let builder = http::authed(gloo_net::http::Request::delete(&endpoints().delete(resource, id)));
        http::send_discard(builder).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/meet/login`.
///
/// # Errors
///
/// Returns an error if the request fails or is rejected.
pub async fn meet_login(request: &MeetLoginRequest) -> Result<MeetLoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json(http::authed(gloo_net::http::Request::post(&endpoints().meet_login())), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/meet/create`.
///
/// # Errors
///
/// Returns an error if the request fails or is rejected.
pub async fn meet_create(request: &MeetCreateRequest) -> Result<MeetCreateResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json(http::authed(gloo_net::http::Request::post(&endpoints().meet_create())), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/meet/join`.
///
/// # Errors
///
/// Returns an error if the request fails or is rejected.
pub async fn meet_join(request: &MeetJoinRequest) -> Result<MeetJoinResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json(http::authed(gloo_net::http::Request::post(&endpoints().meet_join())), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
