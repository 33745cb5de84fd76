use super::*;

#[test]
fn login_accepts_valid_credentials() {
    let resp = login("test@test.com", "password1").unwrap();
    assert_eq!(resp.user.id, "mock-test");
    assert_eq!(resp.user.name, "test");
    assert_eq!(resp.user.email.as_deref(), Some("test@test.com"));
}

#[test]
fn login_rejects_invalid_email() {
    let err = login("not-an-email", "password1").unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.display_message(), MOCK_REJECTED_MESSAGE);
}

#[test]
fn login_rejects_weak_password() {
    assert!(login("test@test.com", "abcdefgh").is_err());
    assert!(login("test@test.com", "pass1").is_err());
}
