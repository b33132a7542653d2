use serde_json::json;

use super::*;

// =============================================================
// ApiError::from_response
// =============================================================

#[test]
fn error_message_prefers_detail() {
    let err = ApiError::from_response(401, r#"{"title":"Unauthorized","detail":"Bad credentials"}"#);
    assert_eq!(err.status, 401);
    assert_eq!(err.message, "Bad credentials");
    assert_eq!(err.detail(), Some("Bad credentials"));
}

#[test]
fn error_message_falls_through_field_order() {
    let err = ApiError::from_response(400, r#"{"message":"","title":"Method argument not valid"}"#);
    assert_eq!(err.message, "Method argument not valid");

    let err = ApiError::from_response(400, r#"{"error":"invalid_grant","error_description":"Token expired"}"#);
    assert_eq!(err.message, "Token expired");
}

#[test]
fn json_without_message_fields_uses_raw_text() {
    let err = ApiError::from_response(500, r#"{"status":500}"#);
    assert_eq!(err.message, r#"{"status":500}"#);
    assert_eq!(err.body, Some(json!({ "status": 500 })));
}

#[test]
fn plain_text_body_becomes_message() {
    let err = ApiError::from_response(502, "  upstream down \n");
    assert_eq!(err.message, "upstream down");
    assert_eq!(err.body, Some(json!("upstream down")));
}

#[test]
fn empty_body_uses_status_message() {
    let err = ApiError::from_response(404, "");
    assert_eq!(err.message, "Request failed with status 404");
    assert!(err.body.is_none());
    assert!(err.detail().is_none());
}

#[test]
fn transport_error_has_status_zero() {
    let err = ApiError::transport("network down");
    assert_eq!(err.status, 0);
    assert_eq!(err.to_string(), "network down");
}

// =============================================================
// URL helpers
// =============================================================

#[test]
fn resolve_url_keeps_relative_with_empty_base() {
    assert_eq!(resolve_url("", "/api/account"), "/api/account");
}

#[test]
fn resolve_url_joins_base_without_double_slash() {
    assert_eq!(resolve_url("https://app.lithodat.com/", "/api/account"), "https://app.lithodat.com/api/account");
    assert_eq!(resolve_url("https://app.lithodat.com", "api/account"), "https://app.lithodat.com/api/account");
}

#[test]
fn resolve_url_passes_absolute_urls_through() {
    assert_eq!(resolve_url("https://a", "https://b/x"), "https://b/x");
}

#[test]
fn with_query_encodes_keys_and_values() {
    let url = with_query("/api/x", &[("name.contains", "a b&c".to_owned()), ("page", "0".to_owned())]);
    assert_eq!(url, "/api/x?name.contains=a%20b%26c&page=0");
}

#[test]
fn with_query_without_pairs_is_bare_path() {
    assert_eq!(with_query("/api/x", &[]), "/api/x");
}

// =============================================================
// Headers and bodies
// =============================================================

#[test]
fn total_count_parses_or_defaults_to_zero() {
    assert_eq!(parse_total_count(Some("42")), 42);
    assert_eq!(parse_total_count(Some(" 7 ")), 7);
    assert_eq!(parse_total_count(Some("lots")), 0);
    assert_eq!(parse_total_count(None), 0);
}

#[test]
fn bearer_requires_non_empty_token() {
    assert_eq!(bearer(Some("abc")), Some("Bearer abc".to_owned()));
    assert_eq!(bearer(Some("")), None);
    assert_eq!(bearer(None), None);
}

#[test]
fn decode_body_skips_non_json_and_empty() {
    assert_eq!(decode_body::<serde_json::Value>(false, "{}").expect("ok"), None);
    assert_eq!(decode_body::<serde_json::Value>(true, "  ").expect("ok"), None);
    assert_eq!(decode_body::<serde_json::Value>(true, r#"{"a":1}"#).expect("ok"), Some(json!({ "a": 1 })));
    assert!(decode_body::<serde_json::Value>(true, "{").is_err());
}
