//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only carries the upstream client: the console keeps no server-side data.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use axum::http::Uri;

use crate::config::Config;

/// HTTP client bound to the configured backend.
#[derive(Clone, Debug)]
pub struct Upstream {
    pub client: reqwest::Client,
    base: String,
}

impl Upstream {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend init).
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .connect_timeout(config.upstream_connect_timeout)
            .build()?;
        Ok(Self { client, base: config.api_base_url.clone() })
    }

    /// Rebase an incoming request URI (path + query) onto the backend.
    #[must_use]
    pub fn target_url(&self, uri: &Uri) -> String {
        let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
        format!("{}{}", self.base, path_and_query)
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Debug)]
pub struct AppState {
    pub upstream: Upstream,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the upstream client cannot be built.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self { upstream: Upstream::new(config)? })
    }
}
