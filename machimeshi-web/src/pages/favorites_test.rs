//! Tests for the favorites page fetch guard.

use crate::pages::favorites::loads_user_favorites;
use crate::session::store::SessionState;

/// Test a general session fetches its favorites
#[test]
fn test_general_session_fetches_favorites() {
    let session = SessionState::active("token", "user");
    assert!(loads_user_favorites(&session));
}

/// Test a shop session never calls the user-scoped favorites endpoints
#[test]
fn test_shop_session_skips_favorites_fetch() {
    for spelling in ["shop_user", "shop"] {
        let session = SessionState::active("token", spelling);
        assert!(!loads_user_favorites(&session));
    }
}

/// Test an unknown role falls back to the general fetch path
#[test]
fn test_unknown_role_fetches_favorites() {
    let session = SessionState::active("token", "moderator");
    assert!(loads_user_favorites(&session));
}
