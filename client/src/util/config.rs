//! Compile-time client configuration.
//!
//! Values are baked in at build time from the environment so the WASM bundle
//! needs no runtime config fetch:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LITHO_CLIENT_API_BASE_URL` | empty | API origin; empty sends requests to the serving origin (proxied) |
//! | `LITHO_TILE_URL_TEMPLATE` | OpenStreetMap | `{z}/{x}/{y}` raster tile URL template |
//!
//! The API variable is distinct from the server's upstream setting so that
//! pointing the proxy somewhere never bakes that origin into the bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Public LithoDat origin, used to resolve server-relative asset URLs when
/// the API itself is reached through the local proxy.
pub const LITHODAT_ORIGIN: &str = "https://app.lithodat.com";

/// Build-time variable read by [`api_base_url`].
pub const API_BASE_URL_VAR: &str = "LITHO_CLIENT_API_BASE_URL";

pub const DEFAULT_TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Base URL prepended to `/api/...` request paths.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("LITHO_CLIENT_API_BASE_URL").unwrap_or("")
}

/// Raster tile source for the sample map.
#[must_use]
pub fn tile_url_template() -> &'static str {
    option_env!("LITHO_TILE_URL_TEMPLATE").unwrap_or(DEFAULT_TILE_URL_TEMPLATE)
}

/// Resolve a possibly server-relative asset URL (e.g. an account image).
#[must_use]
pub fn asset_url(raw: &str) -> String {
    asset_url_with_base(api_base_url(), raw)
}

fn asset_url_with_base(api_base: &str, raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with("data:") {
        return raw.to_owned();
    }
    let base = if api_base.is_empty() { LITHODAT_ORIGIN } else { api_base }.trim_end_matches('/');
    if raw.starts_with('/') { format!("{base}{raw}") } else { format!("{base}/{raw}") }
}
