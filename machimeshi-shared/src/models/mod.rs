//! Wire and persistence models shared by the server and the web client.

pub mod auth;
pub mod errors;
pub mod favorite;
pub mod menu;
pub mod notification;
pub mod role;
pub mod shop;
pub mod upload;
pub mod user;

pub use auth::{TokenClaims, TokenResponse};
pub use errors::{ErrorResponse, MessageResponse};
pub use favorite::{FavoriteStatus, MenuFavoriteRequest};
pub use menu::{CreateMenuRequest, Menu, MenuPage, MenuQuery, UpdateMenuRequest};
pub use notification::{Notification, UnreadCount};
pub use role::Role;
pub use shop::{Area, Genre, Shop, UpdateShopRequest};
pub use upload::UploadResponse;
pub use user::{
    LoginRequest, RegisterShopAccountRequest, RegisterUserRequest, ShopAccount, ShopLoginRequest,
    UpdateProfileRequest, User,
};
