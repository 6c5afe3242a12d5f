use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Membership answer for the favorite status endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct FavoriteStatus {
    /// Whether the item is in the user's favorites.
    pub is_favorite: bool,
}

/// Body for adding or removing a menu favorite.
///
/// The server rejects requests whose `user_id` does not match the bearer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct MenuFavoriteRequest {
    /// The user favoriting the item.
    pub user_id: Uuid,

    /// The menu item being favorited.
    pub menu_id: Uuid,
}

/// Query parameters for the menu favorite membership check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, IntoParams)]
pub struct MenuFavoriteCheckQuery {
    /// The user to check for.
    pub user_id: Uuid,

    /// The menu item to check.
    pub menu_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the membership answer keeps its wire field name
    #[test]
    fn test_favorite_status_serialization() {
        let status = FavoriteStatus { is_favorite: true };
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"is_favorite":true}"#);
    }

    /// Test the favorite body round-trips
    #[test]
    fn test_menu_favorite_request_round_trip() {
        let request = MenuFavoriteRequest {
            user_id: Uuid::new_v4(),
            menu_id: Uuid::new_v4(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: MenuFavoriteRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
