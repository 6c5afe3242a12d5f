use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Maximum page size accepted by the menu listing.
pub const MAX_PER_PAGE: u32 = 100;

/// A menu item offered by a shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Menu {
    /// Unique identifier for the menu item.
    pub id: Uuid,

    /// The shop offering this item.
    pub shop_id: Uuid,

    /// Item name.
    pub name: String,

    /// Longer description, if any.
    pub description: Option<String>,

    /// Price in yen.
    pub price: i32,

    /// Free-form category label used for filtering.
    pub category: Option<String>,

    /// URL of the item's image.
    pub image_url: Option<String>,

    /// Whether the item is currently orderable.
    pub is_available: bool,

    /// When the item was created.
    pub created_at: DateTime<Utc>,

    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Request to create a menu item. The owning shop comes from the bearer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CreateMenuRequest {
    /// Item name, at most 100 characters.
    pub name: String,

    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,

    /// Price in yen, non-negative.
    pub price: i32,

    /// Category label.
    #[serde(default)]
    pub category: Option<String>,

    /// URL of the item's image, usually produced by the upload endpoint.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Whether the item starts out orderable.
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

/// Request to update a menu item. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct UpdateMenuRequest {
    /// New item name.
    #[serde(default)]
    pub name: Option<String>,

    /// New description.
    #[serde(default)]
    pub description: Option<String>,

    /// New price in yen.
    #[serde(default)]
    pub price: Option<i32>,

    /// New category label.
    #[serde(default)]
    pub category: Option<String>,

    /// New image URL.
    #[serde(default)]
    pub image_url: Option<String>,

    /// New availability flag.
    #[serde(default)]
    pub is_available: Option<bool>,
}

/// Query parameters accepted by the menu listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, IntoParams)]
pub struct MenuQuery {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,

    /// Page size, between 1 and [`MAX_PER_PAGE`].
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Only items in this category.
    #[serde(default)]
    pub category: Option<String>,

    /// Substring match against name and description.
    #[serde(default)]
    pub search: Option<String>,

    /// Only items currently orderable.
    #[serde(default)]
    pub available_only: bool,

    /// Only items offered by this shop.
    #[serde(default)]
    pub shop_id: Option<Uuid>,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl Default for MenuQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            category: None,
            search: None,
            available_only: false,
            shop_id: None,
        }
    }
}

impl MenuQuery {
    /// Validate the pagination bounds.
    ///
    /// # Errors
    /// Returns a human-readable message when `page` or `per_page` is out of
    /// range.
    pub fn validate(&self) -> Result<(), String> {
        if self.page == 0 {
            return Err("page must be at least 1".to_string());
        }
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(format!("per_page must be between 1 and {MAX_PER_PAGE}"));
        }
        Ok(())
    }

    /// Row offset for the current page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.per_page)
    }
}

/// One page of menu items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct MenuPage {
    /// The items on this page.
    pub items: Vec<Menu>,

    /// Total matching items across all pages.
    pub total: i64,

    /// The page that was returned.
    pub page: u32,

    /// The page size that was applied.
    pub per_page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test query defaults apply when parameters are omitted
    #[test]
    fn test_menu_query_defaults() {
        let query: MenuQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 20);
        assert!(!query.available_only);
        assert!(query.validate().is_ok());
    }

    /// Test pagination bounds are enforced
    #[test]
    fn test_menu_query_validation() {
        let zero_page = MenuQuery {
            page: 0,
            ..MenuQuery::default()
        };
        assert!(zero_page.validate().is_err());

        let zero_size = MenuQuery {
            per_page: 0,
            ..MenuQuery::default()
        };
        assert!(zero_size.validate().is_err());

        let oversized = MenuQuery {
            per_page: MAX_PER_PAGE + 1,
            ..MenuQuery::default()
        };
        assert!(oversized.validate().is_err());

        let at_cap = MenuQuery {
            per_page: MAX_PER_PAGE,
            ..MenuQuery::default()
        };
        assert!(at_cap.validate().is_ok());
    }

    /// Test offset arithmetic for later pages
    #[test]
    fn test_menu_query_offset() {
        let query = MenuQuery {
            page: 3,
            per_page: 25,
            ..MenuQuery::default()
        };
        assert_eq!(query.offset(), 50);
        assert_eq!(MenuQuery::default().offset(), 0);
    }

    /// Test create request defaults availability to true
    #[test]
    fn test_create_menu_request_defaults() {
        let json = r#"{"name":"Shoyu Ramen","price":900}"#;
        let request: CreateMenuRequest = serde_json::from_str(json).unwrap();
        assert!(request.is_available);
        assert_eq!(request.description, None);
    }
}
