//! Menu item browsing and shop-side management handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use shared::models::{
    CreateMenuRequest, ErrorResponse, Menu, MenuPage, MenuQuery, MessageResponse,
    UpdateMenuRequest,
};

use crate::{
    app_state::AppState, http::error::AppResult,
    middleware::request_context::RequestContext, services::menu_service,
};

/// List menu items matching the query.
#[utoipa::path(
    get,
    path = "/api/menus",
    params(MenuQuery),
    responses(
        (status = 200, description = "One page of matching items", body = MenuPage),
        (status = 422, description = "Pagination out of range", body = ErrorResponse)
    ),
    tag = "Menus"
)]
#[instrument(skip(state))]
pub async fn list_menus(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<MenuPage>> {
    let page = menu_service::list_menus(state.db()?, &query).await?;
    Ok(Json(page))
}

/// Fetch one menu item.
#[utoipa::path(
    get,
    path = "/api/menus/{id}",
    params(("id" = Uuid, Path, description = "Menu id")),
    responses(
        (status = 200, description = "The menu item", body = Menu),
        (status = 404, description = "Menu not found", body = ErrorResponse)
    ),
    tag = "Menus"
)]
#[instrument(skip(state))]
pub async fn get_menu(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Menu>> {
    let menu = menu_service::get_menu(state.db()?, id).await?;
    Ok(Json(menu))
}

/// Create a menu item under the bearer's shop.
#[utoipa::path(
    post,
    path = "/api/menus",
    request_body = CreateMenuRequest,
    responses(
        (status = 201, description = "Created menu item", body = Menu),
        (status = 403, description = "Shop account required", body = ErrorResponse),
        (status = 422, description = "Name or price out of range", body = ErrorResponse)
    ),
    tag = "Menus"
)]
#[instrument(skip(state, context, payload))]
pub async fn create_menu(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Json(payload): Json<CreateMenuRequest>,
) -> AppResult<(StatusCode, Json<Menu>)> {
    let account = context.require_account()?;
    account.require_shop()?;
    let menu = menu_service::create_menu(state.db()?, account.id, &payload).await?;
    metrics::counter!("menus_created_total").increment(1);
    Ok((StatusCode::CREATED, Json(menu)))
}

/// Partially update a menu item the bearer's shop owns.
#[utoipa::path(
    put,
    path = "/api/menus/{id}",
    params(("id" = Uuid, Path, description = "Menu id")),
    request_body = UpdateMenuRequest,
    responses(
        (status = 200, description = "Updated menu item", body = Menu),
        (status = 403, description = "Not the owning shop", body = ErrorResponse),
        (status = 404, description = "Menu not found", body = ErrorResponse)
    ),
    tag = "Menus"
)]
#[instrument(skip(state, context, payload))]
pub async fn update_menu(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMenuRequest>,
) -> AppResult<Json<Menu>> {
    let account = context.require_account()?;
    account.require_shop()?;
    let menu = menu_service::update_menu(state.db()?, account.id, id, &payload).await?;
    Ok(Json(menu))
}

/// Delete a menu item the bearer's shop owns.
#[utoipa::path(
    delete,
    path = "/api/menus/{id}",
    params(("id" = Uuid, Path, description = "Menu id")),
    responses(
        (status = 200, description = "Menu deleted", body = MessageResponse),
        (status = 403, description = "Not the owning shop", body = ErrorResponse),
        (status = 404, description = "Menu not found", body = ErrorResponse)
    ),
    tag = "Menus"
)]
#[instrument(skip(state, context))]
pub async fn delete_menu(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let account = context.require_account()?;
    account.require_shop()?;
    menu_service::delete_menu(state.db()?, account.id, id).await?;
    Ok(Json(MessageResponse::new("Menu deleted")))
}
