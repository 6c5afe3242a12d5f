use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A shop listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Shop {
    /// Unique identifier for the shop.
    pub id: Uuid,

    /// The area the shop belongs to, if assigned.
    pub area_id: Option<Uuid>,

    /// Display name.
    pub name: String,

    /// Longer description shown on the detail page.
    pub detail: Option<String>,

    /// Path of the shop's cover image.
    pub image_path: Option<String>,

    /// Homepage URL, if the shop has one.
    pub homepage_url: Option<String>,

    /// Street address.
    pub address: Option<String>,

    /// Contact phone number.
    pub phone: Option<String>,

    /// When the shop was created.
    pub created_at: DateTime<Utc>,
}

/// Request to update a shop's listing. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct UpdateShopRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,

    /// New description.
    #[serde(default)]
    pub detail: Option<String>,

    /// New cover image path.
    #[serde(default)]
    pub image_path: Option<String>,

    /// New homepage URL.
    #[serde(default)]
    pub homepage_url: Option<String>,

    /// New street address.
    #[serde(default)]
    pub address: Option<String>,

    /// New phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl UpdateShopRequest {
    /// Whether the request changes anything at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.detail.is_none()
            && self.image_path.is_none()
            && self.homepage_url.is_none()
            && self.address.is_none()
            && self.phone.is_none()
    }
}

/// A geographic area shops are grouped under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Area {
    /// Unique identifier for the area.
    pub id: Uuid,

    /// Display name.
    pub name: String,
}

/// A cuisine genre menu items are tagged with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Genre {
    /// Unique identifier for the genre.
    pub id: Uuid,

    /// Display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test an all-absent update request is recognized as empty
    #[test]
    fn test_update_shop_request_is_empty() {
        assert!(UpdateShopRequest::default().is_empty());
        let request = UpdateShopRequest {
            phone: Some("06-1234-5678".to_string()),
            ..UpdateShopRequest::default()
        };
        assert!(!request.is_empty());
    }

    /// Test optional fields deserialize when omitted
    #[test]
    fn test_update_shop_request_partial_json() {
        let json = r#"{"name":"Ramen Kujira"}"#;
        let request: UpdateShopRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name.as_deref(), Some("Ramen Kujira"));
        assert_eq!(request.detail, None);
    }
}
