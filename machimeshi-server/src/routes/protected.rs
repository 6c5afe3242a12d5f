use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use tracing::info;

use shared::config::server::UploadConfig;

use crate::{
    app_state::AppState,
    handlers::{
        auth::{me, shop_me, update_me},
        favorites::{
            add_menu_favorite, add_shop_favorite, check_menu_favorite, list_menu_favorites,
            list_shop_favorites, remove_menu_favorite, remove_shop_favorite,
            shop_favorite_status,
        },
        menus::{create_menu, delete_menu, get_menu, list_menus, update_menu},
        notifications::{list_notifications, mark_read, unread_count},
        shops::{get_shop, list_areas, list_genres, list_shops, update_shop},
        uploads::{delete_image, upload_image},
    },
};

/// Register every route that requires a bearer token. The caller wraps the
/// returned router in the auth middleware.
pub fn create_router_protected(uploads: &UploadConfig) -> Router<Arc<AppState>> {
    info!("Creating protected router");

    // Multipart bodies carry the image plus framing overhead.
    let upload_limit = usize::try_from(uploads.max_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(64 * 1024);

    Router::new()
        .route("/auth/me", get(me).put(update_me))
        .route("/auth/shop/me", get(shop_me))
        .route("/shops", get(list_shops))
        .route("/shops/{id}", get(get_shop).put(update_shop))
        .route("/areas", get(list_areas))
        .route("/genres", get(list_genres))
        .route("/menus", get(list_menus).post(create_menu))
        .route(
            "/menus/{id}",
            get(get_menu).put(update_menu).delete(delete_menu),
        )
        .route(
            "/favorites/users/{user_id}/shops",
            get(list_shop_favorites),
        )
        .route(
            "/favorites/users/{user_id}/shops/{shop_id}",
            post(add_shop_favorite).delete(remove_shop_favorite),
        )
        .route(
            "/favorites/users/{user_id}/shops/{shop_id}/status",
            get(shop_favorite_status),
        )
        .route(
            "/menu_favorites",
            post(add_menu_favorite).delete(remove_menu_favorite),
        )
        .route("/menu_favorites/user/{user_id}", get(list_menu_favorites))
        .route("/menu_favorites/check", get(check_menu_favorite))
        .route("/notifications", get(list_notifications))
        .route("/notifications/unread_count", get(unread_count))
        .route("/notifications/{id}/read", post(mark_read))
        .route(
            "/upload/image",
            post(upload_image).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/upload/image/{filename}", delete(delete_image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_router_protected() {
        let router = create_router_protected(&UploadConfig::default());
        assert!(router.has_routes(), "Router should not be empty");
    }
}
