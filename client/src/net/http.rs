//! JSON-over-HTTP transport for the LithoDat REST API.
//!
//! DESIGN
//! ======
//! Every request carries `Content-Type: application/json` and, when a session
//! token is stored, `Authorization: Bearer <token>`. Non-2xx responses are
//! folded into [`ApiError`] with a best-effort human message; nothing here
//! retries or redirects. Under SSR the transport is unavailable and every
//! call resolves to an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde_json::Value;

/// Body fields consulted, in order, for a human-readable error message.
const MESSAGE_FIELDS: [&str; 5] = ["detail", "message", "title", "error_description", "error"];

/// A failed API call.
///
/// `status` is the HTTP status, or `0` when the request never produced a
/// response (network failure, CORS rejection, SSR).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    /// Response body, parsed as JSON when possible, else the raw text.
    pub body: Option<Value>,
}

impl ApiError {
    /// Build an error from a non-2xx status and its response text.
    #[must_use]
    pub fn from_response(status: u16, text: &str) -> Self {
        let trimmed = text.trim();
        let body = if trimmed.is_empty() {
            None
        } else {
            Some(serde_json::from_str::<Value>(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_owned())))
        };
        let message = body
            .as_ref()
            .and_then(extract_message)
            .or_else(|| (!trimmed.is_empty()).then(|| trimmed.to_owned()))
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self { status, message, body }
    }

    /// The request did not complete.
    #[must_use]
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self { status: 0, message: err.to_string(), body: None }
    }

    /// The response arrived but could not be decoded.
    #[must_use]
    pub fn decode(status: u16, err: impl std::fmt::Display) -> Self {
        Self { status, message: format!("Invalid response: {err}"), body: None }
    }

    /// The value of the body's `detail` field, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.body.as_ref()?.get("detail")?.as_str()
    }
}

/// First non-empty message field of a JSON object body.
fn extract_message(body: &Value) -> Option<String> {
    let map = body.as_object()?;
    MESSAGE_FIELDS
        .iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .find(|s| !s.trim().is_empty())
        .map(str::to_owned)
}

/// HTTP methods used by the API client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Join a request path onto the API base.
///
/// Absolute URLs pass through untouched; an empty base keeps the path
/// relative so the request goes to the serving origin.
#[must_use]
pub fn resolve_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Parse an `X-Total-Count` header; absent or malformed counts are zero.
#[must_use]
pub fn parse_total_count(header: Option<&str>) -> u64 {
    header.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// `Authorization` header value for a stored session token.
#[must_use]
pub fn bearer(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

/// Append `pairs` to `path` as an encoded query string.
#[must_use]
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// A successful response: status, total count header, and decoded JSON body.
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub total_count: u64,
    /// `None` when the response was not `application/json`.
    pub data: Option<T>,
}

/// Decode a successful response body. Non-JSON and empty bodies yield `None`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: serde::de::DeserializeOwned>(is_json: bool, text: &str) -> Result<Option<T>, serde_json::Error> {
    if !is_json || text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text).map(Some)
}

/// Send a request and decode a JSON body.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or undecodable JSON.
pub async fn request<T>(method: Method, path: &str, body: Option<&Value>) -> Result<ApiResponse<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::{Method as GlooMethod, RequestBuilder};

        let url = resolve_url(crate::util::config::api_base_url(), path);
        let mut builder = RequestBuilder::new(&url)
            .method(match method {
                Method::Get => GlooMethod::GET,
                Method::Post => GlooMethod::POST,
            })
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if let Some(auth) = bearer(crate::util::token::stored_token().as_deref()) {
            builder = builder.header("Authorization", &auth);
        }
        let request = match body {
            Some(value) => builder.body(value.to_string()),
            None => builder.build(),
        }
        .map_err(ApiError::transport)?;

        let resp = request.send().await.map_err(|e| {
            log::warn!("api {method:?} {path}: transport failure: {e}");
            ApiError::transport(e)
        })?;
        let status = resp.status();
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            let err = ApiError::from_response(status, &text);
            log::warn!("api {method:?} {path}: status={status} message={}", err.message);
            return Err(err);
        }

        let total_count = parse_total_count(resp.headers().get("x-total-count").as_deref());
        let is_json = resp
            .headers()
            .get("content-type")
            .is_some_and(|ct| ct.contains("application/json"));
        let text = resp.text().await.map_err(|e| ApiError::decode(status, e))?;
        let data = decode_body(is_json, &text).map_err(|e| ApiError::decode(status, e))?;
        Ok(ApiResponse { status, total_count, data })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, body);
        Err(ApiError::transport(format!("{path}: not available on server")))
    }
}

/// Send a request whose response body is required.
///
/// # Errors
///
/// As [`request`], plus an error when the response carried no JSON body.
pub async fn request_data<T>(method: Method, path: &str, body: Option<&Value>) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = request::<T>(method, path, body).await?;
    let status = resp.status;
    resp.data.ok_or_else(|| ApiError::decode(status, "expected a JSON body"))
}

/// Send a request whose response body is ignored.
///
/// # Errors
///
/// As [`request`].
pub async fn request_empty(method: Method, path: &str, body: Option<&Value>) -> Result<(), ApiError> {
    request::<serde::de::IgnoredAny>(method, path, body).await.map(|_| ())
}
