//! Server configuration parsed from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PORT` | `3000` |
//! | `LITHO_API_BASE_URL` | `https://app.lithodat.com` |
//! | `PROXY_REQUEST_TIMEOUT_SECS` | `30` |
//! | `PROXY_CONNECT_TIMEOUT_SECS` | `10` |
//!
//! A `.env` file in the working directory is loaded first (see `main`).
//! The browser bundle reads its own API origin from a separate build-time
//! variable (`client::util::config::API_BASE_URL_VAR`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const UPSTREAM_URL_VAR: &str = "LITHO_API_BASE_URL";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://app.lithodat.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream origin without a trailing slash; `/api/...` is appended.
    pub upstream_base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a malformed number or upstream URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset and blank values take the default.
    ///
    /// # Errors
    ///
    /// As [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_number("PORT", get("PORT"), DEFAULT_PORT)?;
        let upstream_base_url = parse_base_url(get(UPSTREAM_URL_VAR))?;
        let request_secs =
            parse_number("PROXY_REQUEST_TIMEOUT_SECS", get("PROXY_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let connect_secs =
            parse_number("PROXY_CONNECT_TIMEOUT_SECS", get("PROXY_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS)?;

        Ok(Self {
            port,
            upstream_base_url,
            request_timeout: Duration::from_secs(request_secs),
            connect_timeout: Duration::from_secs(connect_secs),
        })
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

fn parse_base_url(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(value) = raw else {
        return Ok(DEFAULT_UPSTREAM_BASE_URL.to_owned());
    };
    let trimmed = value.trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());
    if has_host {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidUrl { var: UPSTREAM_URL_VAR, value })
    }
}
