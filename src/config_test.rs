use std::collections::HashMap;

use super::*;

fn config(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    Config::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_apply_when_only_base_url_is_set() {
    let cfg = config(&[("API_BASE_URL", "https://api.meet.test/")]).unwrap();
    assert_eq!(cfg.api_base_url, "https://api.meet.test");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(30));
    assert_eq!(cfg.upstream_connect_timeout, Duration::from_secs(10));
}

#[test]
fn base_url_without_scheme_gets_http() {
    let cfg = config(&[("API_BASE_URL", "10.0.0.5:8080")]).unwrap();
    assert_eq!(cfg.api_base_url, "http://10.0.0.5:8080");
}

#[test]
fn missing_base_url_is_an_error() {
    assert_eq!(config(&[]), Err(ConfigError::Missing("API_BASE_URL")));
    assert_eq!(config(&[("API_BASE_URL", "   ")]), Err(ConfigError::Missing("API_BASE_URL")));
}

#[test]
fn overrides_parse() {
    let cfg = config(&[
        ("API_BASE_URL", "http://backend"),
        ("PORT", "8081"),
        ("BIND_ADDR", "127.0.0.1"),
        ("UPSTREAM_TIMEOUT_SECS", "5"),
        ("UPSTREAM_CONNECT_TIMEOUT_SECS", "2"),
    ])
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8081");
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(5));
    assert_eq!(cfg.upstream_connect_timeout, Duration::from_secs(2));
}

#[test]
fn bad_port_reports_value() {
    let err = config(&[("API_BASE_URL", "http://backend"), ("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { name: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}
