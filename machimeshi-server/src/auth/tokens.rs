//! Bearer token issuing and verification.
//!
//! Access tokens are HS256 JWTs carrying the account id, its role, and an
//! expiry that matches the client cookie TTL. Expiry is only ever discovered
//! here; clients treat a 401 as the end of their session.

use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use shared::config::server::AuthConfig;
use shared::models::{Role, TokenClaims};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced while issuing or verifying tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The token's expiry has passed.
    #[error("token has expired")]
    Expired,

    /// The token is malformed, tampered with, or signed with another key.
    #[error("token is invalid")]
    Invalid,

    /// Signing a new token failed.
    #[error("failed to sign token")]
    Signing,
}

/// Issues and verifies the HS256 bearer tokens used by every login flow.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Build a service from the resolved auth configuration.
    #[must_use]
    pub fn from_config(auth: &AuthConfig) -> Self {
        Self::new(&auth.token_secret, auth.token_ttl_days)
    }

    /// Build a service with an explicit secret and TTL in days.
    #[must_use]
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Issue a token for the given account and role.
    ///
    /// # Errors
    /// Returns [`TokenError::Signing`] when encoding fails.
    pub fn issue(&self, account_id: Uuid, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: account_id,
            user_type: role,
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::Signing)
    }

    /// Verify a presented token and return its claims.
    ///
    /// # Errors
    /// Returns [`TokenError::Expired`] for a stale token and
    /// [`TokenError::Invalid`] for anything else that fails validation.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("unit-test-secret", 7)
    }

    #[test]
    fn issue_then_verify_round_trip() {
        let tokens = service();
        let account_id = Uuid::new_v4();

        let token = tokens.issue(account_id, Role::ShopUser).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, account_id);
        assert_eq!(claims.user_type, Role::ShopUser);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tampered_token_is_invalid() {
        let tokens = service();
        let token = tokens.issue(Uuid::new_v4(), Role::GeneralUser).unwrap();

        let mut tampered = token.clone();
        tampered.push('x');
        assert_eq!(tokens.verify(&tampered), Err(TokenError::Invalid));
    }

    #[test]
    fn token_from_another_secret_is_invalid() {
        let token = TokenService::new("other-secret", 7)
            .issue(Uuid::new_v4(), Role::GeneralUser)
            .unwrap();
        assert_eq!(service().verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let stale = TokenService::new("unit-test-secret", -1);
        let token = stale.issue(Uuid::new_v4(), Role::GeneralUser).unwrap();
        assert_eq!(service().verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(service().verify("garbage"), Err(TokenError::Invalid));
    }
}
