use super::*;

#[test]
fn account_hint_shown_only_in_mock_mode() {
    assert_eq!(account_hint(&ApiConfig::default()), Some(TEST_ACCOUNT_HINT));
    let configured = ApiConfig::from_vars(Some("https://api.example.test"), None);
    assert_eq!(account_hint(&configured), None);
}
