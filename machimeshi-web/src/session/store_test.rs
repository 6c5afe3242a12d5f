//! Tests for session state derivation from raw cookie values.

use crate::session::store::SessionState;
use shared::models::{Role, TokenResponse};

/// Test the default state is the loading frame
#[test]
fn test_default_state_is_resolving() {
    let state = SessionState::default();
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
    assert_eq!(state.token(), None);
}

/// Test a missing token resolves to anonymous
#[test]
fn test_missing_token_is_anonymous() {
    let state = SessionState::from_cookie_values(None, Some("user"));
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
}

/// Test an empty token cookie counts as absent
#[test]
fn test_empty_token_is_anonymous() {
    let state = SessionState::from_cookie_values(Some(String::new()), Some("user"));
    assert!(!state.is_authenticated());
}

/// Test a token with a recognized role resolves fully
#[test]
fn test_token_and_role_resolve() {
    let state = SessionState::from_cookie_values(Some("abc".to_string()), Some("shop_user"));
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::ShopUser));
    assert_eq!(state.token(), Some("abc"));
}

/// Test both shop spellings produce the shop role
#[test]
fn test_legacy_shop_spelling_recognized() {
    for spelling in ["shop", "shop_user"] {
        let state = SessionState::from_cookie_values(Some("abc".to_string()), Some(spelling));
        assert_eq!(state.role(), Some(Role::ShopUser), "spelling {spelling:?}");
    }
}

/// Test an unrecognized role leaves the session authenticated but roleless
#[test]
fn test_unknown_role_is_authenticated_without_role() {
    let state = SessionState::from_cookie_values(Some("abc".to_string()), Some("admin"));
    assert!(state.is_authenticated());
    assert_eq!(state.role(), None);
}

/// Test resolution is idempotent for unchanged inputs
#[test]
fn test_resolution_is_idempotent() {
    let first = SessionState::from_cookie_values(Some("abc".to_string()), Some("user"));
    let second = SessionState::from_cookie_values(Some("abc".to_string()), Some("user"));
    assert_eq!(first, second);
}

/// Test a login response round-trips into the session state
#[test]
fn test_login_response_round_trip() {
    let json = r#"{"access_token":"abc","token_type":"bearer","user_type":"shop_user"}"#;
    let response: TokenResponse = serde_json::from_str(json).unwrap();
    let state = SessionState::active(response.access_token.clone(), &response.user_type);
    assert_eq!(state.token(), Some("abc"));
    assert_eq!(state.role(), Some(Role::ShopUser));
}
