use super::*;

fn creds(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: password.to_owned() }
}

// =============================================================
// Email
// =============================================================

#[test]
fn is_valid_email_accepts_standard_addresses() {
    assert!(is_valid_email("test@test.com"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
}

#[test]
fn is_valid_email_rejects_malformed_addresses() {
    for email in ["", "plain", "@test.com", "user@", "user@domain", "user@domain.", "a b@test.com", "user@@test.com"] {
        assert!(!is_valid_email(email), "{email:?} should be rejected");
    }
}

#[test]
fn validate_email_returns_message_only_on_failure() {
    assert_eq!(validate_email("bad"), Some(INVALID_EMAIL_MESSAGE));
    assert_eq!(validate_email("ok@test.com"), None);
}

// =============================================================
// Password
// =============================================================

#[test]
fn short_password_reports_length_even_without_digits() {
    assert_eq!(validate_password(""), Some(PASSWORD_TOO_SHORT_MESSAGE));
    assert_eq!(validate_password("abc"), Some(PASSWORD_TOO_SHORT_MESSAGE));
    assert_eq!(validate_password("abc1234"), Some(PASSWORD_TOO_SHORT_MESSAGE));
}

#[test]
fn long_password_without_digit_or_letter_reports_composition() {
    assert_eq!(validate_password("abcdefgh"), Some(PASSWORD_COMPOSITION_MESSAGE));
    assert_eq!(validate_password("12345678"), Some(PASSWORD_COMPOSITION_MESSAGE));
    assert_eq!(validate_password("!!!!!!!!"), Some(PASSWORD_COMPOSITION_MESSAGE));
}

#[test]
fn password_with_letter_and_digit_passes() {
    assert_eq!(validate_password("password1"), None);
    assert_eq!(validate_password("1234567a"), None);
}

#[test]
fn password_length_counts_characters_not_bytes() {
    // Four CJK characters are twelve bytes but still too short.
    assert_eq!(validate_password("密碼密碼"), Some(PASSWORD_TOO_SHORT_MESSAGE));
    // Non-ASCII letters do not satisfy the letter requirement.
    assert_eq!(validate_password("密碼密碼密碼12"), Some(PASSWORD_COMPOSITION_MESSAGE));
}

// =============================================================
// Combined
// =============================================================

#[test]
fn validate_reports_both_fields_together() {
    let errors = validate(&creds("nope", "short"));
    assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL_MESSAGE));
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_TOO_SHORT_MESSAGE));
    assert_eq!(errors.len(), 2);
}

#[test]
fn validate_evaluates_password_when_email_is_bad() {
    let errors = validate(&creds("nope", "password1"));
    assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL_MESSAGE));
    assert_eq!(errors.get(Field::Password), None);
}

#[test]
fn validate_returns_empty_for_valid_credentials() {
    assert!(validate(&creds("test@test.com", "password1")).is_empty());
}

#[test]
fn validate_is_deterministic() {
    let input = creds("x@y", "abcdefgh");
    assert_eq!(validate(&input), validate(&input));
}
