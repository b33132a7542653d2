//! `/api/*` reverse proxy to the LithoDat API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks only to this origin; requests under `/api/` are replayed
//! against `{upstream}/api/...` with the original method, raw path, query
//! string and body. Only the headers the client actually sends are forwarded
//! and only those it reads come back, so cookies and hop-by-hop headers never
//! cross. Upstream statuses (including 4xx/5xx) pass through untouched; a
//! request that never reaches the upstream becomes a 502.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Instant;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

const FORWARDED_REQUEST_HEADERS: [HeaderName; 5] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN, header::ACCEPT_LANGUAGE];

const RELAYED_RESPONSE_HEADERS: [HeaderName; 3] =
    [header::CONTENT_TYPE, HeaderName::from_static("x-total-count"), header::LINK];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),

    #[error("upstream response could not be read: {0}")]
    Body(#[source] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Upstream URL for an incoming request, keeping the path's original encoding.
pub(crate) fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

fn copy_headers(from: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in from.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Forward one request upstream and relay the response.
///
/// # Errors
///
/// Returns [`ProxyError`] (rendered as 502) when the upstream is unreachable,
/// times out, or drops the connection mid-body.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let target = upstream_url(&state.upstream, &uri);
    let started = Instant::now();

    let mut request = state.http.request(method.clone(), &target).headers(copy_headers(&headers, &FORWARDED_REQUEST_HEADERS));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, path = uri.path(), timeout = e.is_timeout(), error = %e, "proxy: upstream unreachable");
        ProxyError::Upstream(e)
    })?;

    let status = upstream.status();
    let relayed = copy_headers(upstream.headers(), &RELAYED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, path = uri.path(), error = %e, "proxy: upstream body failed");
        ProxyError::Body(e)
    })?;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    if status.is_server_error() {
        tracing::warn!(%method, path = uri.path(), status = status.as_u16(), elapsed_ms, "proxy: upstream error");
    } else {
        tracing::debug!(%method, path = uri.path(), status = status.as_u16(), elapsed_ms, bytes = bytes.len(), "proxy");
    }

    Ok((status, relayed, bytes).into_response())
}
