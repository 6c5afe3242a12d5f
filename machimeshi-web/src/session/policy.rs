//! The per-route page access policy.
//!
//! Every route declares a [`RouteAccess`] and every gated page runs the same
//! [`evaluate`] table. The decision order is fixed: loading first, then
//! authentication, then role, so no page can check a role before the session
//! has resolved.

use crate::session::store::SessionState;
use shared::models::Role;

/// Access requirements a route declares up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteAccess {
    /// Whether a token must be present to render the page.
    pub requires_auth: bool,

    /// A role the session must hold, checked only after authentication.
    pub required_role: Option<Role>,

    /// Send authenticated visitors home instead of rendering. Used by the
    /// login and registration pages.
    pub bounce_authenticated: bool,
}

impl RouteAccess {
    /// Anyone may view the page.
    pub const PUBLIC: Self = Self {
        requires_auth: false,
        required_role: None,
        bounce_authenticated: false,
    };

    /// A token is required; any role may view.
    pub const AUTHENTICATED: Self = Self {
        requires_auth: true,
        required_role: None,
        bounce_authenticated: false,
    };

    /// A token and the shop role are required.
    pub const SHOP_ONLY: Self = Self {
        requires_auth: true,
        required_role: Some(Role::ShopUser),
        bounce_authenticated: false,
    };

    /// Public, but authenticated visitors are sent home.
    pub const ENTRY: Self = Self {
        requires_auth: false,
        required_role: None,
        bounce_authenticated: true,
    };
}

/// Outcome of evaluating a route's policy against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The session is still resolving: render a neutral loading frame.
    Loading,
    /// Unauthenticated on a protected route: go to the login page.
    RedirectToLogin,
    /// Authenticated but the route demands a role this session lacks, or an
    /// entry page was visited while logged in: go home.
    RedirectHome,
    /// Render the page.
    Render,
}

/// The access policy table. Applied identically to every route.
#[must_use]
pub fn evaluate(access: RouteAccess, session: &SessionState) -> AccessDecision {
    if session.is_loading() {
        return AccessDecision::Loading;
    }
    if access.requires_auth && !session.is_authenticated() {
        return AccessDecision::RedirectToLogin;
    }
    if let Some(required) = access.required_role {
        // An unrecognized role never matches a required one.
        if session.role() != Some(required) {
            return AccessDecision::RedirectHome;
        }
    }
    if access.bounce_authenticated && session.is_authenticated() {
        return AccessDecision::RedirectHome;
    }
    AccessDecision::Render
}
