use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Account role attached to every authenticated session.
///
/// The wire encodings are `"user"` and `"shop_user"`. Historical clients also
/// wrote `"shop"` into the role cookie; [`Role::parse`] accepts that spelling
/// so existing cookies keep working.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum Role {
    /// A general account that browses shops and menus.
    #[serde(rename = "user")]
    GeneralUser,
    /// A shop account that manages a shop and its menu items.
    #[serde(rename = "shop_user")]
    ShopUser,
}

impl Role {
    /// Return the canonical string representation used on the wire and in
    /// the role cookie.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GeneralUser => "user",
            Self::ShopUser => "shop_user",
        }
    }

    /// Normalize an arbitrary role string into a [`Role`].
    ///
    /// Accepts the canonical encodings plus the legacy `"shop"` cookie
    /// spelling, ignoring surrounding whitespace and ASCII case. Returns
    /// `None` for anything unrecognized; callers selecting navigation fall
    /// back to [`Role::GeneralUser`], while access checks treat `None` as
    /// never matching a required role.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Self::GeneralUser),
            "shop" | "shop_user" => Some(Self::ShopUser),
            _ => None,
        }
    }

    /// Whether this role may manage shop content.
    #[must_use]
    pub fn is_shop(self) -> bool {
        matches!(self, Self::ShopUser)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::parse(value).ok_or("unknown account role")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test canonical string round-trips
    #[test]
    fn test_role_canonical_round_trip() {
        for role in [Role::GeneralUser, Role::ShopUser] {
            let parsed = Role::parse(role.as_str());
            assert_eq!(parsed, Some(role));
        }
    }

    /// Test that both shop spellings resolve to the shop role
    #[test]
    fn test_role_accepts_legacy_shop_spelling() {
        assert_eq!(Role::parse("shop"), Some(Role::ShopUser));
        assert_eq!(Role::parse("shop_user"), Some(Role::ShopUser));
    }

    /// Test whitespace and case are ignored
    #[test]
    fn test_role_parse_is_lenient() {
        assert_eq!(Role::parse("  Shop_User "), Some(Role::ShopUser));
        assert_eq!(Role::parse("USER"), Some(Role::GeneralUser));
    }

    /// Test unknown strings produce no role
    #[test]
    fn test_role_parse_rejects_unknown() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("shopuser"), None);
    }

    /// Test FromStr errors on unknown input
    #[test]
    fn test_role_from_str() {
        assert_eq!("shop_user".parse::<Role>(), Ok(Role::ShopUser));
        assert!("moderator".parse::<Role>().is_err());
    }

    /// Test Display matches as_str
    #[test]
    fn test_role_display() {
        assert_eq!(Role::GeneralUser.to_string(), "user");
        assert_eq!(Role::ShopUser.to_string(), "shop_user");
    }

    /// Test serde uses the wire encodings
    #[test]
    fn test_role_serde_encoding() {
        let json = serde_json::to_string(&Role::ShopUser).unwrap();
        assert_eq!(json, "\"shop_user\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::GeneralUser);
    }

    /// Test is_shop discriminates the management role
    #[test]
    fn test_role_is_shop() {
        assert!(Role::ShopUser.is_shop());
        assert!(!Role::GeneralUser.is_shop());
    }
}
