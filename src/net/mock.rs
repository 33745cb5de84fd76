//! In-browser stand-in for the auth backend.
//!
//! Active whenever no API base URL is configured. Accepts any credentials
//! that pass form validation, matching the test-account hint on the login page.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use super::types::{LoginFailure, LoginResponse, User};
use crate::util::validate::{validate_email, validate_password};

pub const MOCK_REJECTED_MESSAGE: &str = "帳號或密碼錯誤";

/// Resolve a login against the mock account rules.
///
/// # Errors
///
/// Returns a 401 failure with [`MOCK_REJECTED_MESSAGE`] for credentials the
/// form validator would reject.
pub fn login(email: &str, password: &str) -> Result<LoginResponse, LoginFailure> {
    if validate_email(email).is_some() || validate_password(password).is_some() {
        return Err(LoginFailure::with_message(401, MOCK_REJECTED_MESSAGE));
    }
    let local = email.split_once('@').map_or(email, |(local, _)| local);
    Ok(LoginResponse {
        user: User {
            id: format!("mock-{local}"),
            name: local.to_owned(),
            email: Some(email.to_owned()),
        },
    })
}
