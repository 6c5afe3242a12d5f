//! Shop listings and the reference data they are grouped under.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use shared::models::{Area, Genre, Shop, UpdateShopRequest};

/// Errors produced by the shop flows.
#[derive(Debug, Error)]
pub enum ShopError {
    /// The shop does not exist.
    #[error("Shop not found")]
    NotFound,

    /// The bearer does not manage this shop.
    #[error("{0}")]
    Forbidden(String),

    /// An underlying database failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(sqlx::FromRow)]
struct ShopRow {
    id: Uuid,
    area_id: Option<Uuid>,
    name: String,
    detail: Option<String>,
    image_path: Option<String>,
    homepage_url: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ShopRow> for Shop {
    fn from(row: ShopRow) -> Self {
        Self {
            id: row.id,
            area_id: row.area_id,
            name: row.name,
            detail: row.detail,
            image_path: row.image_path,
            homepage_url: row.homepage_url,
            address: row.address,
            phone: row.phone,
            created_at: row.created_at,
        }
    }
}

const SHOP_COLUMNS: &str =
    "id, area_id, name, detail, image_path, homepage_url, address, phone, created_at";

/// List shops, optionally restricted to one area.
#[instrument(skip(pool))]
pub async fn list_shops(pool: &PgPool, area_id: Option<Uuid>) -> Result<Vec<Shop>, ShopError> {
    let rows: Vec<ShopRow> = sqlx::query_as(&format!(
        "SELECT {SHOP_COLUMNS} FROM shops \
         WHERE ($1::uuid IS NULL OR area_id = $1) \
         ORDER BY name",
    ))
    .bind(area_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Fetch one shop.
#[instrument(skip(pool))]
pub async fn get_shop(pool: &PgPool, shop_id: Uuid) -> Result<Shop, ShopError> {
    let row: Option<ShopRow> =
        sqlx::query_as(&format!("SELECT {SHOP_COLUMNS} FROM shops WHERE id = $1"))
            .bind(shop_id)
            .fetch_optional(pool)
            .await?;

    row.map(Into::into).ok_or(ShopError::NotFound)
}

/// Update a shop's listing on behalf of the shop account that manages it.
#[instrument(skip(pool, request))]
pub async fn update_shop(
    pool: &PgPool,
    shop_id: Uuid,
    account_id: Uuid,
    request: &UpdateShopRequest,
) -> Result<Shop, ShopError> {
    let managed_shop: Option<Uuid> =
        sqlx::query_scalar("SELECT shop_id FROM shop_accounts WHERE id = $1")
            .bind(account_id)
            .fetch_optional(pool)
            .await?;

    match managed_shop {
        Some(managed) if managed == shop_id => {}
        Some(_) => {
            return Err(ShopError::Forbidden(
                "cannot update another shop's listing".to_string(),
            ));
        }
        None => return Err(ShopError::Forbidden("shop account required".to_string())),
    }

    if request.is_empty() {
        return get_shop(pool, shop_id).await;
    }

    let row: Option<ShopRow> = sqlx::query_as(&format!(
        "UPDATE shops SET \
           name = COALESCE($2, name), \
           detail = COALESCE($3, detail), \
           image_path = COALESCE($4, image_path), \
           homepage_url = COALESCE($5, homepage_url), \
           address = COALESCE($6, address), \
           phone = COALESCE($7, phone) \
         WHERE id = $1 \
         RETURNING {SHOP_COLUMNS}",
    ))
    .bind(shop_id)
    .bind(&request.name)
    .bind(&request.detail)
    .bind(&request.image_path)
    .bind(&request.homepage_url)
    .bind(&request.address)
    .bind(&request.phone)
    .fetch_optional(pool)
    .await?;

    row.map(Into::into).ok_or(ShopError::NotFound)
}

/// List all areas.
#[instrument(skip(pool))]
pub async fn list_areas(pool: &PgPool) -> Result<Vec<Area>, ShopError> {
    let rows: Vec<(Uuid, String)> = sqlx::query_as("SELECT id, name FROM areas ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| Area { id, name })
        .collect())
}

/// List all genres.
#[instrument(skip(pool))]
pub async fn list_genres(pool: &PgPool) -> Result<Vec<Genre>, ShopError> {
    let rows: Vec<(Uuid, String)> = sqlx::query_as("SELECT id, name FROM genres ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| Genre { id, name })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the not-found message matches the wire contract
    #[test]
    fn test_shop_error_messages() {
        assert_eq!(ShopError::NotFound.to_string(), "Shop not found");
        assert_eq!(
            ShopError::Forbidden("shop account required".to_string()).to_string(),
            "shop account required"
        );
    }
}
