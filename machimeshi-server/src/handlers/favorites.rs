//! Favorite handlers. Every endpoint acts on the bearer's own favorites;
//! a path or body naming another user is rejected.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use shared::models::favorite::MenuFavoriteCheckQuery;
use shared::models::{
    ErrorResponse, FavoriteStatus, Menu, MenuFavoriteRequest, MessageResponse, Shop,
};

use crate::{
    app_state::AppState, http::error::AppResult,
    middleware::request_context::RequestContext, services::favorite_service,
};

/// Add a shop to the bearer's favorites.
#[utoipa::path(
    post,
    path = "/api/favorites/users/{user_id}/shops/{shop_id}",
    params(
        ("user_id" = Uuid, Path, description = "User id (must match the bearer)"),
        ("shop_id" = Uuid, Path, description = "Shop id")
    ),
    responses(
        (status = 200, description = "Added", body = MessageResponse),
        (status = 400, description = "Already in favorites", body = ErrorResponse),
        (status = 403, description = "Acting for another account", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
#[instrument(skip(state, context))]
pub async fn add_shop_favorite(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Path((user_id, shop_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<MessageResponse>> {
    let account = context.require_account()?;
    account.require_general()?;
    account.require_self(user_id)?;
    favorite_service::add_shop_favorite(state.db()?, user_id, shop_id).await?;
    Ok(Json(MessageResponse::new("Added to favorites")))
}

/// Remove a shop from the bearer's favorites.
#[utoipa::path(
    delete,
    path = "/api/favorites/users/{user_id}/shops/{shop_id}",
    params(
        ("user_id" = Uuid, Path, description = "User id (must match the bearer)"),
        ("shop_id" = Uuid, Path, description = "Shop id")
    ),
    responses(
        (status = 200, description = "Removed", body = MessageResponse),
        (status = 404, description = "Favorite not found", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
#[instrument(skip(state, context))]
pub async fn remove_shop_favorite(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Path((user_id, shop_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<MessageResponse>> {
    let account = context.require_account()?;
    account.require_general()?;
    account.require_self(user_id)?;
    favorite_service::remove_shop_favorite(state.db()?, user_id, shop_id).await?;
    Ok(Json(MessageResponse::new("Removed from favorites")))
}

/// List the bearer's favorite shops.
#[utoipa::path(
    get,
    path = "/api/favorites/users/{user_id}/shops",
    params(("user_id" = Uuid, Path, description = "User id (must match the bearer)")),
    responses(
        (status = 200, description = "Favorite shops, newest first", body = [Shop])
    ),
    tag = "Favorites"
)]
#[instrument(skip(state, context))]
pub async fn list_shop_favorites(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Vec<Shop>>> {
    let account = context.require_account()?;
    account.require_general()?;
    account.require_self(user_id)?;
    let shops = favorite_service::list_shop_favorites(state.db()?, user_id).await?;
    Ok(Json(shops))
}

/// Whether a shop is in the bearer's favorites.
#[utoipa::path(
    get,
    path = "/api/favorites/users/{user_id}/shops/{shop_id}/status",
    params(
        ("user_id" = Uuid, Path, description = "User id (must match the bearer)"),
        ("shop_id" = Uuid, Path, description = "Shop id")
    ),
    responses(
        (status = 200, description = "Membership answer", body = FavoriteStatus)
    ),
    tag = "Favorites"
)]
#[instrument(skip(state, context))]
pub async fn shop_favorite_status(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Path((user_id, shop_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<FavoriteStatus>> {
    let account = context.require_account()?;
    account.require_general()?;
    account.require_self(user_id)?;
    let is_favorite = favorite_service::shop_favorite_status(state.db()?, user_id, shop_id).await?;
    Ok(Json(FavoriteStatus { is_favorite }))
}

/// Add a menu item to the bearer's favorites.
#[utoipa::path(
    post,
    path = "/api/menu_favorites",
    request_body = MenuFavoriteRequest,
    responses(
        (status = 200, description = "Added", body = MessageResponse),
        (status = 400, description = "Already in favorites", body = ErrorResponse),
        (status = 403, description = "Acting for another account", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
#[instrument(skip(state, context, payload))]
pub async fn add_menu_favorite(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Json(payload): Json<MenuFavoriteRequest>,
) -> AppResult<Json<MessageResponse>> {
    let account = context.require_account()?;
    account.require_general()?;
    account.require_self(payload.user_id)?;
    favorite_service::add_menu_favorite(state.db()?, payload.user_id, payload.menu_id).await?;
    Ok(Json(MessageResponse::new("Added to favorites")))
}

/// Remove a menu item from the bearer's favorites.
#[utoipa::path(
    delete,
    path = "/api/menu_favorites",
    request_body = MenuFavoriteRequest,
    responses(
        (status = 200, description = "Removed", body = MessageResponse),
        (status = 404, description = "Favorite not found", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
#[instrument(skip(state, context, payload))]
pub async fn remove_menu_favorite(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Json(payload): Json<MenuFavoriteRequest>,
) -> AppResult<Json<MessageResponse>> {
    let account = context.require_account()?;
    account.require_general()?;
    account.require_self(payload.user_id)?;
    favorite_service::remove_menu_favorite(state.db()?, payload.user_id, payload.menu_id).await?;
    Ok(Json(MessageResponse::new("Removed from favorites")))
}

/// List the bearer's favorite menu items.
#[utoipa::path(
    get,
    path = "/api/menu_favorites/user/{user_id}",
    params(("user_id" = Uuid, Path, description = "User id (must match the bearer)")),
    responses(
        (status = 200, description = "Favorite menu items, newest first", body = [Menu])
    ),
    tag = "Favorites"
)]
#[instrument(skip(state, context))]
pub async fn list_menu_favorites(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Vec<Menu>>> {
    let account = context.require_account()?;
    account.require_general()?;
    account.require_self(user_id)?;
    let menus = favorite_service::list_menu_favorites(state.db()?, user_id).await?;
    Ok(Json(menus))
}

/// Whether a menu item is in the bearer's favorites.
#[utoipa::path(
    get,
    path = "/api/menu_favorites/check",
    params(MenuFavoriteCheckQuery),
    responses(
        (status = 200, description = "Membership answer", body = FavoriteStatus)
    ),
    tag = "Favorites"
)]
#[instrument(skip(state, context))]
pub async fn check_menu_favorite(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Query(query): Query<MenuFavoriteCheckQuery>,
) -> AppResult<Json<FavoriteStatus>> {
    let account = context.require_account()?;
    account.require_general()?;
    account.require_self(query.user_id)?;
    let is_favorite =
        favorite_service::menu_favorite_status(state.db()?, query.user_id, query.menu_id).await?;
    Ok(Json(FavoriteStatus { is_favorite }))
}
