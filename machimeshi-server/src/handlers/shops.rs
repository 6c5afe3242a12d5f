//! Shop listing, detail, and management handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;
use uuid::Uuid;

use shared::models::{Area, ErrorResponse, Genre, Shop, UpdateShopRequest};

use crate::{
    app_state::AppState, http::error::AppResult,
    middleware::request_context::RequestContext, services::shop_service,
};

/// Filter accepted by the shop listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ShopListQuery {
    /// Only shops in this area.
    #[serde(default)]
    pub area_id: Option<Uuid>,
}

/// List shops, optionally filtered by area.
#[utoipa::path(
    get,
    path = "/api/shops",
    params(ShopListQuery),
    responses(
        (status = 200, description = "Matching shops", body = [Shop])
    ),
    tag = "Shops"
)]
#[instrument(skip(state))]
pub async fn list_shops(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ShopListQuery>,
) -> AppResult<Json<Vec<Shop>>> {
    let shops = shop_service::list_shops(state.db()?, query.area_id).await?;
    Ok(Json(shops))
}

/// Fetch one shop.
#[utoipa::path(
    get,
    path = "/api/shops/{id}",
    params(("id" = Uuid, Path, description = "Shop id")),
    responses(
        (status = 200, description = "The shop", body = Shop),
        (status = 404, description = "Shop not found", body = ErrorResponse)
    ),
    tag = "Shops"
)]
#[instrument(skip(state))]
pub async fn get_shop(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Shop>> {
    let shop = shop_service::get_shop(state.db()?, id).await?;
    Ok(Json(shop))
}

/// Update the bearer's own shop.
#[utoipa::path(
    put,
    path = "/api/shops/{id}",
    params(("id" = Uuid, Path, description = "Shop id")),
    request_body = UpdateShopRequest,
    responses(
        (status = 200, description = "Updated shop", body = Shop),
        (status = 403, description = "Not the managing account", body = ErrorResponse),
        (status = 404, description = "Shop not found", body = ErrorResponse)
    ),
    tag = "Shops"
)]
#[instrument(skip(state, context, payload))]
pub async fn update_shop(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateShopRequest>,
) -> AppResult<Json<Shop>> {
    let account = context.require_account()?;
    account.require_shop()?;
    let shop = shop_service::update_shop(state.db()?, id, account.id, &payload).await?;
    Ok(Json(shop))
}

/// List all areas.
#[utoipa::path(
    get,
    path = "/api/areas",
    responses((status = 200, description = "All areas", body = [Area])),
    tag = "Shops"
)]
#[instrument(skip(state))]
pub async fn list_areas(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Area>>> {
    let areas = shop_service::list_areas(state.db()?).await?;
    Ok(Json(areas))
}

/// List all genres.
#[utoipa::path(
    get,
    path = "/api/genres",
    responses((status = 200, description = "All genres", body = [Genre])),
    tag = "Shops"
)]
#[instrument(skip(state))]
pub async fn list_genres(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Genre>>> {
    let genres = shop_service::list_genres(state.db()?).await?;
    Ok(Json(genres))
}
