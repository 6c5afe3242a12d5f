#![allow(clippy::needless_for_each)] // Derive macro emits a for_each internally

//! OpenAPI document describing the MachiMeshi API.

use shared::models::{
    Area, CreateMenuRequest, ErrorResponse, FavoriteStatus, Genre, LoginRequest, Menu,
    MenuFavoriteRequest, MenuPage, MessageResponse, Notification, RegisterShopAccountRequest,
    RegisterUserRequest, Role, Shop, ShopAccount, ShopLoginRequest, TokenResponse, UnreadCount,
    UpdateMenuRequest, UpdateProfileRequest, UpdateShopRequest, UploadResponse, User,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MachiMeshi API",
        version = "1.0.0",
        description = "API documentation for the MachiMeshi shop and menu discovery platform"
    ),
    paths(
        crate::handlers::auth::register,
        crate::handlers::auth::register_shop,
        crate::handlers::auth::login,
        crate::handlers::auth::shop_login,
        crate::handlers::auth::me,
        crate::handlers::auth::shop_me,
        crate::handlers::auth::update_me,
        crate::handlers::shops::list_shops,
        crate::handlers::shops::get_shop,
        crate::handlers::shops::update_shop,
        crate::handlers::shops::list_areas,
        crate::handlers::shops::list_genres,
        crate::handlers::menus::list_menus,
        crate::handlers::menus::get_menu,
        crate::handlers::menus::create_menu,
        crate::handlers::menus::update_menu,
        crate::handlers::menus::delete_menu,
        crate::handlers::favorites::add_shop_favorite,
        crate::handlers::favorites::remove_shop_favorite,
        crate::handlers::favorites::list_shop_favorites,
        crate::handlers::favorites::shop_favorite_status,
        crate::handlers::favorites::add_menu_favorite,
        crate::handlers::favorites::remove_menu_favorite,
        crate::handlers::favorites::list_menu_favorites,
        crate::handlers::favorites::check_menu_favorite,
        crate::handlers::notifications::list_notifications,
        crate::handlers::notifications::unread_count,
        crate::handlers::notifications::mark_read,
        crate::handlers::uploads::upload_image,
        crate::handlers::uploads::delete_image,
    ),
    components(
        schemas(
            Area,
            CreateMenuRequest,
            ErrorResponse,
            FavoriteStatus,
            Genre,
            LoginRequest,
            Menu,
            MenuFavoriteRequest,
            MenuPage,
            MessageResponse,
            Notification,
            RegisterShopAccountRequest,
            RegisterUserRequest,
            Role,
            Shop,
            ShopAccount,
            ShopLoginRequest,
            TokenResponse,
            UnreadCount,
            UpdateMenuRequest,
            UpdateProfileRequest,
            UpdateShopRequest,
            UploadResponse,
            User,
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login, and profile endpoints"),
        (name = "Shops", description = "Shop listings and reference data"),
        (name = "Menus", description = "Menu item browsing and management"),
        (name = "Favorites", description = "Shop and menu favorites"),
        (name = "Notifications", description = "Per-account notifications"),
        (name = "Uploads", description = "Image uploads")
    )
)]
pub struct ApiDoc;
