use super::*;
use crate::net::mock::MOCK_REJECTED_MESSAGE;
use futures::executor::block_on;

#[test]
fn classify_status_separates_unauthorized() {
    assert_eq!(classify_status(401), ApiError::Unauthorized);
    assert_eq!(classify_status(500), ApiError::Status(500));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed: 503");
    assert_eq!(ApiError::Unauthorized.to_string(), "session rejected");
}

#[test]
fn login_in_mock_mode_uses_mock_backend() {
    let config = ApiConfig::default();
    let resp = block_on(login(&config, "test@test.com", "password1")).unwrap();
    assert_eq!(resp.user.name, "test");

    let err = block_on(login(&config, "test@test.com", "short")).unwrap_err();
    assert_eq!(err.display_message(), MOCK_REJECTED_MESSAGE);
}

#[test]
fn fetch_current_user_unavailable_in_mock_mode() {
    let config = ApiConfig::default();
    assert_eq!(block_on(fetch_current_user(&config)), Err(ApiError::Unavailable));
}

#[test]
fn logout_is_callable_without_endpoint() {
    block_on(logout(&ApiConfig::default()));
}
