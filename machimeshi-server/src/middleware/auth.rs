use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::models::Role;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_state::AppState,
    http::error::{ApiError, AppResult},
    middleware::request_context::RequestContext,
};

/// The bearer identity attached to a request once it passes the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    pub id: Uuid,
    pub role: Role,
}

impl AuthenticatedAccount {
    /// Reject accounts that cannot manage shop content.
    pub fn require_shop(&self) -> AppResult<()> {
        if self.role.is_shop() {
            Ok(())
        } else {
            Err(ApiError::forbidden("shop account required"))
        }
    }

    /// Reject shop accounts where a general account is expected.
    pub fn require_general(&self) -> AppResult<()> {
        if self.role.is_shop() {
            Err(ApiError::forbidden("general account required"))
        } else {
            Ok(())
        }
    }

    /// Reject requests acting on another account's data.
    pub fn require_self(&self, user_id: Uuid) -> AppResult<()> {
        if self.id == user_id {
            Ok(())
        } else {
            Err(ApiError::forbidden("cannot act for another account"))
        }
    }
}

// Middleware guarding every protected route group. Verifies the bearer
// token and threads the account through the request extensions.
#[instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer(req.headers()) else {
        return challenge("missing bearer token");
    };

    let claims = match state.tokens.verify(&token) {
        Ok(claims) => claims,
        Err(err) => return challenge(&err.to_string()),
    };

    let account = AuthenticatedAccount {
        id: claims.sub,
        role: claims.user_type,
    };

    if let Some(context) = req.extensions_mut().get_mut::<RequestContext>() {
        context.account = Some(account);
    } else {
        req.extensions_mut().insert(RequestContext {
            request_id: String::new(),
            account: Some(account),
        });
    }

    next.run(req).await
}

/// 401 with the bearer challenge header.
fn challenge(message: &str) -> Response {
    let mut response = ApiError::unauthorized(message).into_response();
    response.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Bearer"),
    );
    response
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extract_bearer_reads_the_token() {
        let headers = headers_with_authorization("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn extract_bearer_is_scheme_case_insensitive() {
        let headers = headers_with_authorization("bearer token-1");
        assert_eq!(extract_bearer(&headers), Some("token-1".to_string()));
    }

    #[test]
    fn extract_bearer_rejects_other_schemes() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn extract_bearer_rejects_empty_tokens() {
        let headers = headers_with_authorization("Bearer   ");
        assert_eq!(extract_bearer(&headers), None);
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn challenge_carries_the_bearer_header() {
        let response = challenge("missing bearer token");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response
                .headers()
                .get(header::WWW_AUTHENTICATE)
                .and_then(|value| value.to_str().ok()),
            Some("Bearer")
        );
    }

    #[test]
    fn role_guards_enforce_the_expected_role() {
        let shop = AuthenticatedAccount {
            id: Uuid::new_v4(),
            role: Role::ShopUser,
        };
        assert!(shop.require_shop().is_ok());
        assert!(shop.require_general().is_err());

        let general = AuthenticatedAccount {
            id: Uuid::new_v4(),
            role: Role::GeneralUser,
        };
        assert!(general.require_general().is_ok());
        assert!(general.require_shop().is_err());
    }

    #[test]
    fn require_self_compares_account_ids() {
        let id = Uuid::new_v4();
        let account = AuthenticatedAccount {
            id,
            role: Role::GeneralUser,
        };
        assert!(account.require_self(id).is_ok());
        assert!(account.require_self(Uuid::new_v4()).is_err());
    }
}
