//! Typed HTTP client for the MachiMeshi API.

use crate::session::store;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::models::{
    Area, CreateMenuRequest, ErrorResponse, FavoriteStatus, Genre, LoginRequest, Menu,
    MenuFavoriteRequest, MenuPage, MenuQuery, MessageResponse, Notification,
    RegisterShopAccountRequest, RegisterUserRequest, Shop, ShopAccount, ShopLoginRequest,
    TokenResponse, UnreadCount, UpdateMenuRequest, UpdateProfileRequest, UploadResponse, User,
};
use std::cell::OnceCell;
use std::fmt;
use uuid::Uuid;

const DEFAULT_BASE_URL: &str = "/api";

thread_local! {
    static SHARED_CLIENT: OnceCell<MachiMeshiClient> = const { OnceCell::new() };
}

/// What went wrong with an API call.
///
/// `Unauthorized` is special-cased: it means the stored token is dead, and
/// the caller must clear the session (the gate then redirects to login).
#[derive(Debug)]
pub enum ApiError {
    /// The server rejected the bearer token.
    Unauthorized,
    /// The server answered with an error message.
    Message(String),
    /// The request never produced a usable response.
    Transport(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => f.write_str("session expired"),
            Self::Message(message) => f.write_str(message),
            Self::Transport(err) => write!(f, "unable to reach the server: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

/// Lightweight API client for MachiMeshi web interactions.
#[derive(Clone, Debug)]
pub struct MachiMeshiClient {
    base_url: String,
    client: Client,
}

impl MachiMeshiClient {
    /// Create a new API client with the provided base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The per-tab shared client instance.
    #[must_use]
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(DEFAULT_BASE_URL)).clone())
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the stored bearer token, when one is present. The cookie store
    /// is the source of truth, so a login in this tab is picked up without
    /// re-creating the client.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match store::stored_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn accept<T>(response: Response) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map_or_else(|_| format!("request failed: {status}"), |body| body.message);
            return Err(ApiError::Message(message));
        }
        Ok(response.json().await?)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .authorized(self.client.get(self.api_url(path)))
            .send()
            .await?;
        Self::accept(response).await
    }

    // -- accounts and tokens --------------------------------------------

    /// Register a general user account.
    pub async fn register(&self, payload: &RegisterUserRequest) -> Result<User, ApiError> {
        let response = self
            .client
            .post(self.api_url("auth/register"))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await
    }

    /// Register a shop account.
    pub async fn register_shop(
        &self,
        payload: &RegisterShopAccountRequest,
    ) -> Result<ShopAccount, ApiError> {
        let response = self
            .client
            .post(self.api_url("auth/shop/register"))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await
    }

    /// Authenticate a general user by email and password.
    pub async fn login(&self, payload: &LoginRequest) -> Result<TokenResponse, ApiError> {
        let response = self
            .client
            .post(self.api_url("auth/login"))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await
    }

    /// Authenticate a shop account by username and password.
    pub async fn shop_login(&self, payload: &ShopLoginRequest) -> Result<TokenResponse, ApiError> {
        let response = self
            .client
            .post(self.api_url("auth/shop/login"))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await
    }

    /// Fetch the bearer's general profile.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("auth/me").await
    }

    /// Fetch the bearer's shop account profile.
    pub async fn shop_me(&self) -> Result<ShopAccount, ApiError> {
        self.get_json("auth/shop/me").await
    }

    /// Update the bearer's general profile.
    pub async fn update_me(&self, payload: &UpdateProfileRequest) -> Result<User, ApiError> {
        let response = self
            .authorized(self.client.put(self.api_url("auth/me")))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await
    }

    // -- shops ----------------------------------------------------------

    /// List shops, optionally restricted to an area.
    pub async fn list_shops(&self, area_id: Option<Uuid>) -> Result<Vec<Shop>, ApiError> {
        let mut request = self.authorized(self.client.get(self.api_url("shops")));
        if let Some(area_id) = area_id {
            request = request.query(&[("area_id", area_id.to_string())]);
        }
        Self::accept(request.send().await?).await
    }

    /// Fetch one shop.
    pub async fn get_shop(&self, id: Uuid) -> Result<Shop, ApiError> {
        self.get_json(&format!("shops/{id}")).await
    }

    /// Update the bearer's own shop.
    #[allow(dead_code)]
    pub async fn update_shop(
        &self,
        id: Uuid,
        payload: &shared::models::UpdateShopRequest,
    ) -> Result<Shop, ApiError> {
        let response = self
            .authorized(self.client.put(self.api_url(&format!("shops/{id}"))))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await
    }

    /// List the reference areas.
    pub async fn list_areas(&self) -> Result<Vec<Area>, ApiError> {
        self.get_json("areas").await
    }

    /// List the reference genres.
    #[allow(dead_code)]
    pub async fn list_genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.get_json("genres").await
    }

    // -- menus ----------------------------------------------------------

    /// List menu items for the given page and filters.
    pub async fn list_menus(&self, query: &MenuQuery) -> Result<MenuPage, ApiError> {
        let response = self
            .authorized(self.client.get(self.api_url("menus")).query(query))
            .send()
            .await?;
        Self::accept(response).await
    }

    /// Fetch one menu item.
    pub async fn get_menu(&self, id: Uuid) -> Result<Menu, ApiError> {
        self.get_json(&format!("menus/{id}")).await
    }

    /// Create a menu item for the bearer's shop.
    pub async fn create_menu(&self, payload: &CreateMenuRequest) -> Result<Menu, ApiError> {
        let response = self
            .authorized(self.client.post(self.api_url("menus")))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await
    }

    /// Update a menu item.
    #[allow(dead_code)]
    pub async fn update_menu(
        &self,
        id: Uuid,
        payload: &UpdateMenuRequest,
    ) -> Result<Menu, ApiError> {
        let response = self
            .authorized(self.client.put(self.api_url(&format!("menus/{id}"))))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await
    }

    /// Delete a menu item.
    #[allow(dead_code)]
    pub async fn delete_menu(&self, id: Uuid) -> Result<MessageResponse, ApiError> {
        let response = self
            .authorized(self.client.delete(self.api_url(&format!("menus/{id}"))))
            .send()
            .await?;
        Self::accept(response).await
    }

    // -- favorites ------------------------------------------------------

    /// Add a shop to a user's favorites.
    pub async fn add_shop_favorite(
        &self,
        user_id: Uuid,
        shop_id: Uuid,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("favorites/users/{user_id}/shops/{shop_id}"));
        let response = self.authorized(self.client.post(url)).send().await?;
        Self::accept(response).await
    }

    /// Remove a shop from a user's favorites.
    pub async fn remove_shop_favorite(
        &self,
        user_id: Uuid,
        shop_id: Uuid,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("favorites/users/{user_id}/shops/{shop_id}"));
        let response = self.authorized(self.client.delete(url)).send().await?;
        Self::accept(response).await
    }

    /// List a user's favorite shops.
    pub async fn list_shop_favorites(&self, user_id: Uuid) -> Result<Vec<Shop>, ApiError> {
        self.get_json(&format!("favorites/users/{user_id}/shops"))
            .await
    }

    /// Whether a shop is in a user's favorites.
    pub async fn shop_favorite_status(
        &self,
        user_id: Uuid,
        shop_id: Uuid,
    ) -> Result<FavoriteStatus, ApiError> {
        self.get_json(&format!(
            "favorites/users/{user_id}/shops/{shop_id}/status"
        ))
        .await
    }

    /// Add a menu item to a user's favorites.
    pub async fn add_menu_favorite(
        &self,
        payload: &MenuFavoriteRequest,
    ) -> Result<MessageResponse, ApiError> {
        let response = self
            .authorized(self.client.post(self.api_url("menu_favorites")))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await
    }

    /// Remove a menu item from a user's favorites.
    pub async fn remove_menu_favorite(
        &self,
        payload: &MenuFavoriteRequest,
    ) -> Result<MessageResponse, ApiError> {
        let response = self
            .authorized(self.client.delete(self.api_url("menu_favorites")))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await
    }

    /// List a user's favorite menu items.
    pub async fn list_menu_favorites(&self, user_id: Uuid) -> Result<Vec<Menu>, ApiError> {
        self.get_json(&format!("menu_favorites/user/{user_id}")).await
    }

    /// Whether a menu item is in a user's favorites.
    pub async fn check_menu_favorite(
        &self,
        user_id: Uuid,
        menu_id: Uuid,
    ) -> Result<FavoriteStatus, ApiError> {
        let response = self
            .authorized(self.client.get(self.api_url("menu_favorites/check")).query(&[
                ("user_id", user_id.to_string()),
                ("menu_id", menu_id.to_string()),
            ]))
            .send()
            .await?;
        Self::accept(response).await
    }

    // -- notifications --------------------------------------------------

    /// List the bearer's notifications, newest first.
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_json("notifications").await
    }

    /// Count the bearer's unread notifications.
    pub async fn unread_count(&self) -> Result<UnreadCount, ApiError> {
        self.get_json("notifications/unread_count").await
    }

    /// Mark one notification read.
    pub async fn mark_notification_read(&self, id: Uuid) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("notifications/{id}/read"));
        let response = self.authorized(self.client.post(url)).send().await?;
        Self::accept(response).await
    }

    // -- uploads --------------------------------------------------------

    /// Upload an image and get back the URL it is served from.
    pub async fn upload_image(
        &self,
        filename: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let response = self
            .authorized(self.client.post(self.api_url("upload/image")))
            .multipart(form)
            .send()
            .await?;
        Self::accept(response).await
    }

    /// Delete a previously uploaded image.
    #[allow(dead_code)]
    pub async fn delete_image(&self, filename: &str) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("upload/image/{filename}"));
        let response = self.authorized(self.client.delete(url)).send().await?;
        Self::accept(response).await
    }
}
