//! LithoDat REST endpoints.
//!
//! Each function maps one server operation onto [`super::http`]. Path and
//! query construction is kept in small pure helpers so it can be tested
//! without a browser.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use geojson::FeatureCollection;
use serde_json::json;

use super::http::{self, ApiError, Method};
use super::types::{JwtToken, LithoUser, LoginVm, RegisterVm, SampleCriteria, SamplePage, SampleRecord, UserDto};
use crate::util::token;

const SAMPLES_PATH: &str = "/api/core/sample-with-locations";

pub(crate) fn samples_list_path(page: u32, size: u32, criteria: &SampleCriteria) -> String {
    let mut pairs = vec![("page", page.to_string()), ("size", size.to_string())];
    pairs.extend(criteria.query_pairs());
    http::with_query(SAMPLES_PATH, &pairs)
}

pub(crate) fn sample_path(id: &str) -> String {
    format!("{SAMPLES_PATH}/{}", urlencoding::encode(id))
}

pub(crate) fn sample_count_path(criteria: &SampleCriteria) -> String {
    http::with_query(&format!("{SAMPLES_PATH}/count"), &criteria.query_pairs())
}

pub(crate) fn geo_features_path(criteria: &SampleCriteria) -> String {
    http::with_query(&format!("{SAMPLES_PATH}/findGeoFeatureCollection"), &criteria.query_pairs())
}

pub(crate) fn litho_users_path(search: &str, page: u32, size: u32) -> String {
    let mut pairs = Vec::new();
    let search = search.trim();
    if !search.is_empty() {
        pairs.push(("search", search.to_owned()));
    }
    pairs.push(("page", page.to_string()));
    pairs.push(("size", size.to_string()));
    http::with_query("/api/management/litho-users", &pairs)
}

fn activate_path(key: &str) -> String {
    http::with_query("/api/activate", &[("key", key.to_owned())])
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::decode(0, e))
}

// =============================================================
// Account
// =============================================================

/// Authenticate and persist the returned token.
///
/// With `remember_me` the token survives browser restarts (`localStorage`);
/// otherwise it lives for the tab session only.
///
/// # Errors
///
/// Returns the server's error for bad credentials or transport failure.
pub async fn login(vm: LoginVm) -> Result<JwtToken, ApiError> {
    let body = to_json(&vm)?;
    let jwt: JwtToken = http::request_data(Method::Post, "/api/authenticate", Some(&body)).await?;
    token::store_token(&jwt.id_token, vm.remember_me);
    Ok(jwt)
}

/// Forget the session token. No server call is made.
pub fn logout() {
    token::clear_token();
}

/// # Errors
///
/// Returns an error when unauthenticated or on transport failure.
pub async fn fetch_account() -> Result<UserDto, ApiError> {
    http::request_data(Method::Get, "/api/account", None).await
}

/// # Errors
///
/// Returns the server's validation error (login taken, bad email, ...).
pub async fn register(vm: RegisterVm) -> Result<(), ApiError> {
    let body = to_json(&vm)?;
    http::request_empty(Method::Post, "/api/register", Some(&body)).await
}

/// # Errors
///
/// Returns an error for an unknown or already used key.
pub async fn activate_account(key: &str) -> Result<(), ApiError> {
    http::request_empty(Method::Get, &activate_path(key), None).await
}

/// Ask the server to email a reset link. The body is the bare email string.
///
/// # Errors
///
/// Returns an error on transport failure or server rejection.
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    let body = json!(email);
    http::request_empty(Method::Post, "/api/account/reset-password/init", Some(&body)).await
}

/// # Errors
///
/// Returns an error for an invalid or expired key.
pub async fn finish_password_reset(key: &str, new_password: &str) -> Result<(), ApiError> {
    let body = json!({ "key": key, "newPassword": new_password });
    http::request_empty(Method::Post, "/api/account/reset-password/finish", Some(&body)).await
}

// =============================================================
// Samples
// =============================================================

/// One page of samples matching `criteria`.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn fetch_samples(page: u32, size: u32, criteria: &SampleCriteria) -> Result<SamplePage, ApiError> {
    let resp = http::request::<Vec<SampleRecord>>(Method::Get, &samples_list_path(page, size, criteria), None).await?;
    Ok(SamplePage { rows: resp.data.unwrap_or_default(), total_count: resp.total_count })
}

/// # Errors
///
/// Returns an error when the sample does not exist or is not visible.
pub async fn fetch_sample(id: &str) -> Result<SampleRecord, ApiError> {
    http::request_data(Method::Get, &sample_path(id), None).await
}

/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn fetch_sample_count(criteria: &SampleCriteria) -> Result<u64, ApiError> {
    http::request_data(Method::Get, &sample_count_path(criteria), None).await
}

/// Sample locations as GeoJSON points.
///
/// # Errors
///
/// Returns an error on transport failure or an undecodable collection.
pub async fn fetch_geo_features(criteria: &SampleCriteria) -> Result<FeatureCollection, ApiError> {
    http::request_data(Method::Get, &geo_features_path(criteria), None).await
}

/// # Errors
///
/// Returns an error on transport failure or insufficient privileges.
pub async fn fetch_litho_users(search: &str, page: u32, size: u32) -> Result<Vec<LithoUser>, ApiError> {
    let resp = http::request::<Vec<LithoUser>>(Method::Get, &litho_users_path(search, page, size), None).await?;
    Ok(resp.data.unwrap_or_default())
}
