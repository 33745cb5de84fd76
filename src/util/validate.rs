//! Field validation for the login form.
//!
//! DESIGN
//! ======
//! Validation is a pure function of the raw field strings. Both fields are
//! always evaluated so the returned errors are never partially stale.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::OnceLock;

use regex::Regex;

use crate::state::login::{Credentials, Field, FieldErrors};

pub const INVALID_EMAIL_MESSAGE: &str = "請輸入有效的 Email 格式";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "密碼必須至少 8 個字元";
pub const PASSWORD_COMPOSITION_MESSAGE: &str = "密碼必須包含英文字母和數字";

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Whether `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    (!is_valid_email(email)).then_some(INVALID_EMAIL_MESSAGE)
}

/// Length is checked first; composition is only checked for long-enough passwords.
pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Some(PASSWORD_TOO_SHORT_MESSAGE);
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if has_letter && has_digit {
        None
    } else {
        Some(PASSWORD_COMPOSITION_MESSAGE)
    }
}

/// Validate both fields and collect their errors.
///
/// An empty result means the credentials may be submitted.
pub fn validate(credentials: &Credentials) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if let Some(message) = validate_email(&credentials.email) {
        errors.insert(Field::Email, message);
    }
    if let Some(message) = validate_password(&credentials.password) {
        errors.insert(Field::Password, message);
    }
    errors
}
