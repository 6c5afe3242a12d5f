//! The cookie-backed session store.

use shared::models::Role;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Window};
use yewdux::Dispatch;
use yewdux::Store;

/// Cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "authToken";

/// Cookie holding the role discriminator string.
pub const ROLE_COOKIE: &str = "userType";

/// Fixed session cookie lifetime: 7 days.
pub const SESSION_TTL_SECONDS: u32 = 7 * 24 * 60 * 60;

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// The cookies have not been read yet this page load.
    Resolving,
    /// No token is present.
    Anonymous,
    /// A token is present. The role is `None` when the cookie carried an
    /// unrecognized value; such sessions browse with the general navigation
    /// and fail every role-restricted access check.
    Active {
        /// The bearer token as stored in the cookie.
        token: String,
        /// The normalized role, if the cookie value was recognized.
        role: Option<Role>,
    },
}

/// The session as seen by every page and chrome component.
///
/// Pages never touch cookies directly: [`set_session`] and [`clear_session`]
/// are the only writers, and both publish through the store so subscribers
/// (footer, gates, header) react immediately.
#[derive(Debug, Clone, PartialEq, Eq, Store)]
pub struct SessionState {
    phase: SessionPhase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Resolving,
        }
    }
}

impl SessionState {
    /// An anonymous (logged-out) session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            phase: SessionPhase::Anonymous,
        }
    }

    /// An authenticated session with the given token and raw role string.
    #[must_use]
    pub fn active(token: impl Into<String>, role_value: &str) -> Self {
        Self {
            phase: SessionPhase::Active {
                token: token.into(),
                role: Role::parse(role_value),
            },
        }
    }

    /// Derive the session from raw cookie values. Pure, so the decision
    /// logic is testable without a browser.
    #[must_use]
    pub fn from_cookie_values(token: Option<String>, role_value: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self {
                phase: SessionPhase::Active {
                    token,
                    role: role_value.and_then(Role::parse),
                },
            },
            _ => Self::anonymous(),
        }
    }

    /// Whether the cookies have been read yet. Protected content must not
    /// render while this is true.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Resolving
    }

    /// Whether a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Active { .. })
    }

    /// The normalized role, when authenticated with a recognized role.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match &self.phase {
            SessionPhase::Active { role, .. } => *role,
            _ => None,
        }
    }

    /// The bearer token, when authenticated.
    #[allow(dead_code)]
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match &self.phase {
            SessionPhase::Active { token, .. } => Some(token),
            _ => None,
        }
    }
}

/// Read the current session out of the cookie store.
#[must_use]
pub fn resolve() -> SessionState {
    let token = read_cookie(TOKEN_COOKIE);
    let role = read_cookie(ROLE_COOKIE);
    SessionState::from_cookie_values(token, role.as_deref())
}

/// Store a fresh session and publish it. Called from the login pages with
/// the `access_token` and `user_type` of a successful login response.
pub fn set_session(dispatch: &Dispatch<SessionState>, token: &str, user_type: &str) {
    write_cookie(TOKEN_COOKIE, token, SESSION_TTL_SECONDS);
    write_cookie(ROLE_COOKIE, user_type, SESSION_TTL_SECONDS);
    dispatch.set(SessionState::active(token, user_type));
}

/// Drop the session and publish the cleared state. Called on logout and
/// whenever an API call reports the token invalid.
pub fn clear_session(dispatch: &Dispatch<SessionState>) {
    delete_cookie(TOKEN_COOKIE);
    delete_cookie(ROLE_COOKIE);
    dispatch.set(SessionState::anonymous());
}

/// The bearer token as currently persisted, for the API client.
#[must_use]
pub fn stored_token() -> Option<String> {
    read_cookie(TOKEN_COOKIE)
}

fn html_document() -> Option<HtmlDocument> {
    let window: Window = web_sys::window()?;
    let document = window.document()?;
    document.dyn_into().ok()
}

fn read_cookie(name: &str) -> Option<String> {
    let cookie_string = html_document()?.cookie().ok()?;

    for pair in cookie_string.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim();
        if key == name {
            return Some(value.to_string());
        }
    }
    None
}

fn write_cookie(name: &str, value: &str, max_age: u32) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&format!("{name}={value}; max-age={max_age}; path=/"));
    }
}

fn delete_cookie(name: &str) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&format!("{name}=; max-age=0; path=/"));
    }
}
