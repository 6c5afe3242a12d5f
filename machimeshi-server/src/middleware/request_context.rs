use std::str::FromStr;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    http::error::{ApiError, AppResult},
    middleware::auth::AuthenticatedAccount,
};
use shared::config::server::Config;

/// Per-request context populated by the outer middleware stack.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    pub request_id: String,
    pub account: Option<AuthenticatedAccount>,
}

impl RequestContext {
    /// The authenticated account, or a 401 when the request never passed
    /// the auth middleware.
    pub fn require_account(&self) -> AppResult<&AuthenticatedAccount> {
        self.account
            .as_ref()
            .ok_or_else(|| ApiError::unauthorized("authentication required"))
    }
}

#[derive(Clone)]
pub struct RequestIdState {
    header: HeaderName,
}

impl RequestIdState {
    pub fn from_config(config: &Config) -> Self {
        let header = HeaderName::from_str(&config.server.request_id_header)
            .unwrap_or_else(|_| HeaderName::from_static("x-request-id"));
        Self { header }
    }
}

pub async fn assign_request_id(
    State(state): State<RequestIdState>,
    mut request: Request<Body>,
    next: Next,
) -> AppResult<Response> {
    let header_name = state.header.clone();
    let current = extract_request_id(request.headers(), &header_name);

    let request_id = current.unwrap_or_else(|| Uuid::new_v4().to_string());

    request.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
        account: None,
    });

    request.headers_mut().insert(
        header_name.clone(),
        HeaderValue::from_str(&request_id)
            .map_err(|_| ApiError::internal_server_error("failed to encode request id"))?,
    );

    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header_name,
        HeaderValue::from_str(&request_id)
            .map_err(|_| ApiError::internal_server_error("failed to encode request id"))?,
    );

    Ok(response)
}

fn extract_request_id(headers: &HeaderMap, header: &HeaderName) -> Option<String> {
    headers
        .get(header)
        .and_then(|value| value.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    #[test]
    fn require_account_rejects_anonymous_context() {
        let context = RequestContext::default();
        assert!(context.require_account().is_err());
    }

    #[test]
    fn require_account_returns_the_account() {
        let account = AuthenticatedAccount {
            id: Uuid::new_v4(),
            role: Role::GeneralUser,
        };
        let context = RequestContext {
            request_id: "req-1".to_string(),
            account: Some(account.clone()),
        };
        assert_eq!(context.require_account().unwrap(), &account);
    }

    #[test]
    fn extract_request_id_trims_and_skips_blanks() {
        let header = HeaderName::from_static("x-request-id");
        let mut headers = HeaderMap::new();
        headers.insert(&header, HeaderValue::from_static("  abc-123  "));
        assert_eq!(
            extract_request_id(&headers, &header),
            Some("abc-123".to_string())
        );

        headers.insert(&header, HeaderValue::from_static("   "));
        assert_eq!(extract_request_id(&headers, &header), None);
    }
}
