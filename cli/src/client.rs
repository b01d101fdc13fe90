//! Async REST client for the backend, shared by every subcommand.
//!
//! All URLs come from [`wire::Endpoints`]; the `Authorization` header follows
//! the scheme chosen on the command line.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wire::{AuthScheme, Endpoints, ListQuery, Resource};

use crate::CliError;

/// Whether a call carries the `Authorization` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    None,
    /// Sent when a token is configured, omitted otherwise.
    IfPresent,
    Required,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    token: Option<String>,
    scheme: AuthScheme,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str, token: Option<String>, scheme: AuthScheme) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints: Endpoints::new(base_url),
            token: token.filter(|t| !t.trim().is_empty()),
            scheme,
        }
    }

    pub async fn login(&self, request: &wire::LoginRequest) -> Result<wire::LoginResponse, CliError> {
        self.send(Method::POST, &self.endpoints.login(), None, Some(request), Auth::None).await
    }

    pub async fn list(&self, resource: Resource, query: &ListQuery) -> Result<Value, CliError> {
        self.send::<Value, ()>(Method::GET, &self.endpoints.list(resource), Some(query), None, Auth::Required)
            .await
    }

    pub async fn get(&self, resource: Resource, id: &str) -> Result<Value, CliError> {
        self.send::<Value, ()>(Method::GET, &self.endpoints.detail(resource, id), None, None, Auth::Required)
            .await
    }

    pub async fn save(&self, resource: Resource, payload: &Value) -> Result<Value, CliError> {
        self.send(Method::POST, &self.endpoints.save(resource), None, Some(payload), Auth::Required).await
    }

    /// Delete one record. Users have no delete endpoint and are refused
    /// without touching the network.
    pub async fn delete(&self, resource: Resource, id: &str) -> Result<Value, CliError> {
        if !resource.deletable() {
            return Err(CliError::NotDeletable(resource));
        }
        self.send::<Value, ()>(Method::DELETE, &self.endpoints.delete(resource, id), None, None, Auth::Required)
            .await
    }

    pub async fn meet_login(&self, request: &wire::MeetLoginRequest) -> Result<wire::MeetLoginResponse, CliError> {
        self.send(Method::POST, &self.endpoints.meet_login(), None, Some(request), Auth::IfPresent).await
    }

    pub async fn meet_create(
        &self,
        request: &wire::MeetCreateRequest,
    ) -> Result<wire::MeetCreateResponse, CliError> {
        self.send(Method::POST, &self.endpoints.meet_create(), None, Some(request), Auth::IfPresent).await
    }

    pub async fn meet_join(&self, request: &wire::MeetJoinRequest) -> Result<wire::MeetJoinResponse, CliError> {
        self.send(Method::POST, &self.endpoints.meet_join(), None, Some(request), Auth::IfPresent).await
    }

    async fn send<T, B>(
        &self,
        method: Method,
        url: &str,
        query: Option<&ListQuery>,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<T, CliError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method.clone(), url);
        if let Some(query) = query {
            request = request.query(&query.pairs());
        }
        let token = match (auth, self.token.as_deref()) {
            (Auth::None, _) => None,
            (Auth::IfPresent, token) => token,
            (Auth::Required, token) => Some(token.ok_or(CliError::MissingToken)?),
        };
        if let Some(token) = token {
            request = request
                .header(AUTHORIZATION, wire::authorization_value(self.scheme, token))
                .header(CONTENT_TYPE, "application/json");
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, "request");
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "backend rejected request");
            return Err(CliError::Status { status: status.as_u16(), body: text });
        }
        // DELETE and some saves answer with an empty body.
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(text)?)
    }
}
