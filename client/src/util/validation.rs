//! Form validation rules for the account pages.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const PASSWORD_STRENGTH_MESSAGE: &str = "Password must include at least one number and one special character.";
pub const PASSWORD_STRENGTH_HINT: &str = "Password must include a number and a special character.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// A password needs at least one ASCII digit and one character outside `[A-Za-z0-9]`.
#[must_use]
pub fn is_strong_password(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit()) && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Validate a new password and its confirmation, returning the first problem.
///
/// # Errors
///
/// Returns the user-facing message for a weak or mismatched password.
pub fn check_new_password(password: &str, confirm: &str, require_strength: bool) -> Result<(), &'static str> {
    if require_strength && !is_strong_password(password) {
        return Err(PASSWORD_STRENGTH_MESSAGE);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH_MESSAGE);
    }
    Ok(())
}
