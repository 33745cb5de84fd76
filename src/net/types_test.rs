use super::*;

#[test]
fn message_reads_nested_server_text() {
    let failure = LoginFailure::with_message(401, "密碼錯誤");
    assert_eq!(failure.message(), Some("密碼錯誤"));
    assert_eq!(failure.display_message(), "密碼錯誤");
    assert_eq!(failure.status(), Some(401));
}

#[test]
fn display_message_falls_back_when_data_has_no_message() {
    let failure = LoginFailure::from_response(500, Some(FailureData::default()));
    assert_eq!(failure.message(), None);
    assert_eq!(failure.display_message(), LOGIN_FAILED_FALLBACK);
}

#[test]
fn display_message_falls_back_without_data_or_response() {
    assert_eq!(LoginFailure::from_response(502, None).display_message(), LOGIN_FAILED_FALLBACK);
    assert_eq!(LoginFailure::transport().display_message(), LOGIN_FAILED_FALLBACK);
    assert_eq!(LoginFailure::transport().status(), None);
}

#[test]
fn blank_server_message_counts_as_absent() {
    assert_eq!(LoginFailure::with_message(400, "   ").display_message(), LOGIN_FAILED_FALLBACK);
}

#[test]
fn to_string_uses_server_message_or_fallback() {
    assert_eq!(LoginFailure::with_message(401, "密碼錯誤").to_string(), "密碼錯誤");
    assert_eq!(LoginFailure::from_response(500, Some(FailureData::default())).to_string(), LOGIN_FAILED_FALLBACK);
    assert_eq!(LoginFailure::transport().to_string(), LOGIN_FAILED_FALLBACK);
}

#[test]
fn login_failure_is_a_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(LoginFailure::with_message(401, "nope"));
    assert_eq!(err.to_string(), "nope");
}

#[test]
fn from_body_reads_server_message() {
    let failure = LoginFailure::from_body(401, r#"{"message":"密碼錯誤"}"#);
    assert_eq!(failure.status(), Some(401));
    assert_eq!(failure.display_message(), "密碼錯誤");
}

#[test]
fn from_body_without_message_or_json_falls_back() {
    let empty_object = LoginFailure::from_body(400, "{}");
    assert_eq!(empty_object.response.as_ref().and_then(|r| r.data.clone()), Some(FailureData::default()));
    assert_eq!(empty_object.display_message(), LOGIN_FAILED_FALLBACK);

    let html = LoginFailure::from_body(502, "<html>Bad Gateway</html>");
    assert_eq!(html.response.as_ref().and_then(|r| r.data.clone()), None);
    assert_eq!(html.display_message(), LOGIN_FAILED_FALLBACK);

    assert_eq!(LoginFailure::from_body(500, "").display_message(), LOGIN_FAILED_FALLBACK);
}

#[test]
fn failure_data_deserializes_with_and_without_message() {
    let with: FailureData = serde_json::from_str(r#"{"message":"密碼錯誤"}"#).unwrap();
    assert_eq!(with.message.as_deref(), Some("密碼錯誤"));
    let without: FailureData = serde_json::from_str("{}").unwrap();
    assert_eq!(without.message, None);
}

#[test]
fn login_request_serializes_both_fields() {
    let body = serde_json::to_value(LoginRequest { email: "a@b.co", password: "password1" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.co", "password": "password1" }));
}

#[test]
fn user_email_defaults_to_none() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"Alice"}"#).unwrap();
    assert_eq!(user, User { id: "u1".to_owned(), name: "Alice".to_owned(), email: None });
}
