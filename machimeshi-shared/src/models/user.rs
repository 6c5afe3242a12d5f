use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A general user account as returned by the profile endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// Free-form postal address, if the user provided one.
    pub address: Option<String>,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// A shop account as returned by the shop profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ShopAccount {
    /// Unique identifier for the shop account.
    pub id: Uuid,

    /// The shop this account manages.
    pub shop_id: Uuid,

    /// The account's login name.
    pub username: String,

    /// The account's email address.
    pub email: String,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Request to register a general user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct RegisterUserRequest {
    /// Desired username, unique across general accounts.
    pub username: String,

    /// Email address, unique across general accounts.
    pub email: String,

    /// Plain-text password; hashed server-side before storage.
    pub password: String,

    /// Optional postal address.
    #[serde(default)]
    pub address: Option<String>,
}

/// Request to register a shop account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct RegisterShopAccountRequest {
    /// The shop the new account will manage.
    pub shop_id: Uuid,

    /// Desired username, unique across shop accounts.
    pub username: String,

    /// Email address, unique across shop accounts.
    pub email: String,

    /// Plain-text password; hashed server-side before storage.
    pub password: String,
}

/// General login request, keyed by email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct LoginRequest {
    /// The account's email address.
    pub email: String,

    /// The account's password.
    pub password: String,
}

/// Shop login request, keyed by username.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ShopLoginRequest {
    /// The shop account's username.
    pub username: String,

    /// The account's password.
    pub password: String,
}

/// Request to update the bearer's general profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct UpdateProfileRequest {
    /// New username, if changing.
    #[serde(default)]
    pub username: Option<String>,

    /// New email address, if changing.
    #[serde(default)]
    pub email: Option<String>,

    /// New postal address, if changing.
    #[serde(default)]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test register request deserializes without an address
    #[test]
    fn test_register_request_address_optional() {
        let json = r#"{"username":"taro","email":"taro@example.com","password":"secret"}"#;
        let request: RegisterUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "taro");
        assert_eq!(request.address, None);
    }

    /// Test profile update request defaults to no changes
    #[test]
    fn test_update_profile_request_default() {
        let request = UpdateProfileRequest::default();
        assert_eq!(request.username, None);
        assert_eq!(request.email, None);
        assert_eq!(request.address, None);
    }

    /// Test user serialization keeps the wire field names
    #[test]
    fn test_user_serialization() {
        let user = User {
            id: Uuid::new_v4(),
            username: "hanako".to_string(),
            email: "hanako@example.com".to_string(),
            address: Some("Osaka".to_string()),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"username\":\"hanako\""));
        assert!(json.contains("\"address\":\"Osaka\""));
    }
}
