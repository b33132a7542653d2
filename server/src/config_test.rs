use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_base_url, DEFAULT_UPSTREAM_BASE_URL);
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
}

#[test]
fn blank_values_take_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("LITHO_API_BASE_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_base_url, DEFAULT_UPSTREAM_BASE_URL);
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("LITHO_API_BASE_URL", "http://localhost:9000/"),
        ("PROXY_REQUEST_TIMEOUT_SECS", "5"),
        ("PROXY_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_base_url, "http://localhost:9000");
    assert_eq!(cfg.request_timeout, Duration::from_secs(5));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(2));
}

#[test]
fn bad_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn port_out_of_range_is_an_error() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn upstream_must_be_http() {
    let err = ServerConfig::from_lookup(lookup(&[("LITHO_API_BASE_URL", "ftp://example.com")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    assert!(ServerConfig::from_lookup(lookup(&[("LITHO_API_BASE_URL", "https://")])).is_err());
}

#[test]
fn upstream_variable_is_not_baked_into_the_browser_bundle() {
    assert_ne!(UPSTREAM_URL_VAR, client::util::config::API_BASE_URL_VAR);
    let cfg = ServerConfig::from_lookup(lookup(&[(client::util::config::API_BASE_URL_VAR, "http://elsewhere:1")])).unwrap();
    assert_eq!(cfg.upstream_base_url, DEFAULT_UPSTREAM_BASE_URL);
}
