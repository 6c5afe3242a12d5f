use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Role;

/// Successful login response.
///
/// `user_type` is carried as a string on purpose: clients normalize it into
/// a [`Role`] at ingestion and never compare the raw string elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TokenResponse {
    /// The bearer token to present on subsequent requests.
    pub access_token: String,

    /// Token scheme, always `"bearer"`.
    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// Role discriminator for the authenticated account.
    pub user_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl TokenResponse {
    /// Build a bearer response for the given token and role.
    #[must_use]
    pub fn bearer(access_token: impl Into<String>, role: Role) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
            user_type: role.as_str().to_string(),
        }
    }

    /// The normalized role carried by this response, if recognized.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.user_type)
    }
}

/// Claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// The account id the token was issued to.
    pub sub: Uuid,

    /// The account's role.
    pub user_type: Role,

    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,

    /// Issued-at as seconds since the Unix epoch.
    pub iat: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test a login response without token_type still deserializes
    #[test]
    fn test_token_response_token_type_defaults() {
        let json = r#"{"access_token":"abc","user_type":"shop_user"}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "abc");
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.role(), Some(Role::ShopUser));
    }

    /// Test bearer constructor emits canonical encodings
    #[test]
    fn test_token_response_bearer() {
        let response = TokenResponse::bearer("tok", Role::GeneralUser);
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.user_type, "user");
        assert_eq!(response.role(), Some(Role::GeneralUser));
    }

    /// Test an unrecognized user_type yields no role
    #[test]
    fn test_token_response_unknown_role() {
        let json = r#"{"access_token":"abc","token_type":"bearer","user_type":"owner"}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.role(), None);
    }

    /// Test claims serde round-trip
    #[test]
    fn test_token_claims_round_trip() {
        let claims = TokenClaims {
            sub: Uuid::new_v4(),
            user_type: Role::ShopUser,
            exp: 1_700_000_000,
            iat: 1_699_999_000,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"user_type\":\"shop_user\""));
        let back: TokenClaims = serde_json::from_str(&json).unwrap();
        assert_eq!(back, claims);
    }
}
