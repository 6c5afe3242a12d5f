//! Tests for the page access policy table.

use crate::session::policy::{AccessDecision, RouteAccess, evaluate};
use crate::session::store::SessionState;

/// Test nothing renders and nothing redirects while resolving
#[test]
fn test_loading_renders_neutral_frame() {
    for access in [
        RouteAccess::PUBLIC,
        RouteAccess::AUTHENTICATED,
        RouteAccess::SHOP_ONLY,
        RouteAccess::ENTRY,
    ] {
        assert_eq!(
            evaluate(access, &SessionState::default()),
            AccessDecision::Loading
        );
    }
}

/// Test an unauthenticated visit to a protected route goes to login
#[test]
fn test_unauthenticated_protected_route_redirects_to_login() {
    let session = SessionState::anonymous();
    assert_eq!(
        evaluate(RouteAccess::AUTHENTICATED, &session),
        AccessDecision::RedirectToLogin
    );
    assert_eq!(
        evaluate(RouteAccess::SHOP_ONLY, &session),
        AccessDecision::RedirectToLogin
    );
}

/// Test a general user on a shop-only route goes home, not to login
#[test]
fn test_wrong_role_redirects_home() {
    let session = SessionState::active("abc", "user");
    assert_eq!(
        evaluate(RouteAccess::SHOP_ONLY, &session),
        AccessDecision::RedirectHome
    );
}

/// Test a shop user passes the shop-only gate under either spelling
#[test]
fn test_shop_role_passes_shop_gate() {
    for spelling in ["shop", "shop_user"] {
        let session = SessionState::active("abc", spelling);
        assert_eq!(
            evaluate(RouteAccess::SHOP_ONLY, &session),
            AccessDecision::Render,
            "spelling {spelling:?}"
        );
    }
}

/// Test an unrecognized role fails role checks but still browses
#[test]
fn test_unknown_role_fails_role_check_only() {
    let session = SessionState::active("abc", "owner");
    assert_eq!(
        evaluate(RouteAccess::SHOP_ONLY, &session),
        AccessDecision::RedirectHome
    );
    assert_eq!(
        evaluate(RouteAccess::AUTHENTICATED, &session),
        AccessDecision::Render
    );
}

/// Test entry pages bounce authenticated visitors home
#[test]
fn test_entry_page_bounces_authenticated() {
    let session = SessionState::active("abc", "user");
    assert_eq!(
        evaluate(RouteAccess::ENTRY, &session),
        AccessDecision::RedirectHome
    );
    assert_eq!(
        evaluate(RouteAccess::ENTRY, &SessionState::anonymous()),
        AccessDecision::Render
    );
}

/// Test public pages render for everyone once resolved
#[test]
fn test_public_pages_always_render() {
    assert_eq!(
        evaluate(RouteAccess::PUBLIC, &SessionState::anonymous()),
        AccessDecision::Render
    );
    assert_eq!(
        evaluate(RouteAccess::PUBLIC, &SessionState::active("abc", "shop_user")),
        AccessDecision::Render
    );
}

/// Test evaluation is idempotent for an unchanged session
#[test]
fn test_evaluation_is_idempotent() {
    let session = SessionState::anonymous();
    let first = evaluate(RouteAccess::AUTHENTICATED, &session);
    let second = evaluate(RouteAccess::AUTHENTICATED, &session);
    assert_eq!(first, second);
    assert_eq!(first, AccessDecision::RedirectToLogin);
}
