use super::*;

#[test]
fn strong_password_needs_digit_and_symbol() {
    assert!(is_strong_password("hunter2!"));
    assert!(is_strong_password("1 "));
    assert!(!is_strong_password("hunter22"));
    assert!(!is_strong_password("hunter!!"));
    assert!(!is_strong_password(""));
}

#[test]
fn non_ascii_letters_count_as_special() {
    assert!(is_strong_password("pässwort1"));
}

#[test]
fn check_reports_strength_before_mismatch() {
    assert_eq!(check_new_password("weak", "other", true), Err(PASSWORD_STRENGTH_MESSAGE));
    assert_eq!(check_new_password("str0ng!", "other", true), Err(PASSWORD_MISMATCH_MESSAGE));
    assert_eq!(check_new_password("str0ng!", "str0ng!", true), Ok(()));
}

#[test]
fn check_without_strength_only_compares() {
    assert_eq!(check_new_password("weak", "weak", false), Ok(()));
    assert_eq!(check_new_password("weak", "Weak", false), Err(PASSWORD_MISMATCH_MESSAGE));
}
