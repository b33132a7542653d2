use super::*;

#[test]
fn validate_login_input_trims_username_only() {
    assert_eq!(
        validate_login_input("  admin ", " secret "),
        Ok(("admin".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter a username and password."));
    assert_eq!(validate_login_input("admin", ""), Err("Enter a username and password."));
}

#[test]
fn bad_credentials_get_generic_title() {
    let err = ApiError::from_response(401, r#"{"title":"Unauthorized","detail":"Bad credentials","status":401}"#);
    assert_eq!(auth_error_title(&err), Some("Authentication failed"));
}

#[test]
fn other_errors_use_their_message() {
    let err = ApiError::from_response(500, r#"{"detail":"Server exploded"}"#);
    assert_eq!(auth_error_title(&err), None);
    assert_eq!(err.message, "Server exploded");
}
