//! Environment configuration for the host server.
//!
//! `API_BASE_URL` is the single place the backend host is configured; every
//! forwarded request is rebased onto it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Normalized backend base URL, no trailing slash.
    pub api_base_url: String,
    pub upstream_timeout: Duration,
    pub upstream_connect_timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is missing or a value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, so tests need not touch the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is missing or a value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_base_url = get("API_BASE_URL")
            .map(|raw| wire::endpoints::normalize_base_url(&raw))
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("API_BASE_URL"))?;

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let timeout = parse_or("UPSTREAM_TIMEOUT_SECS", get("UPSTREAM_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)?;
        let connect = parse_or(
            "UPSTREAM_CONNECT_TIMEOUT_SECS",
            get("UPSTREAM_CONNECT_TIMEOUT_SECS"),
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            bind_addr,
            port,
            api_base_url,
            upstream_timeout: Duration::from_secs(timeout),
            upstream_connect_timeout: Duration::from_secs(connect),
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name, value }),
    }
}
