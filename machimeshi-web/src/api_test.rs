//! Tests for the API client plumbing that does not need a browser.

use crate::api::{ApiError, MachiMeshiClient};

/// Test base URLs are normalized and joined without double slashes
#[test]
fn test_api_url_joining() {
    let client = MachiMeshiClient::new("/api/");
    assert_eq!(client.api_url("menus"), "/api/menus");
    assert_eq!(client.api_url("/menus"), "/api/menus");
    assert_eq!(client.api_url("auth/login"), "/api/auth/login");
}

/// Test an absolute base URL survives joining
#[test]
fn test_api_url_absolute_base() {
    let client = MachiMeshiClient::new("http://localhost:8080/api");
    assert_eq!(
        client.api_url("notifications/unread_count"),
        "http://localhost:8080/api/notifications/unread_count"
    );
}

/// Test error messages surface the server's wording
#[test]
fn test_api_error_display() {
    let unauthorized = ApiError::Unauthorized;
    assert_eq!(unauthorized.to_string(), "session expired");

    let message = ApiError::Message("Menu not found".to_string());
    assert_eq!(message.to_string(), "Menu not found");
}
