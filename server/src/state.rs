//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for all proxied calls and the upstream
//! origin they are sent to.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the client build error (TLS backend initialisation).
    pub fn from_config(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self::new(http, &config.upstream_base_url))
    }

    #[must_use]
    pub fn new(http: reqwest::Client, upstream: &str) -> Self {
        Self { http, upstream: Arc::from(upstream.trim_end_matches('/')) }
    }
}
