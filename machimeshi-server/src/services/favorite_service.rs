//! Shop and menu favorites for general users.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use shared::models::{Menu, Shop};

/// Errors produced by the favorite flows.
#[derive(Debug, Error)]
pub enum FavoriteError {
    /// The item is already in the user's favorites.
    #[error("Already in favorites")]
    AlreadyFavorite,

    /// The referenced entity or favorite does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

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

#[derive(sqlx::FromRow)]
struct MenuRow {
    id: Uuid,
    shop_id: Uuid,
    name: String,
    description: Option<String>,
    price: i32,
    category: Option<String>,
    image_url: Option<String>,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Self {
            id: row.id,
            shop_id: row.shop_id,
            name: row.name,
            description: row.description,
            price: row.price,
            category: row.category,
            image_url: row.image_url,
            is_available: row.is_available,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Add a shop to a user's favorites.
#[instrument(skip(pool))]
pub async fn add_shop_favorite(
    pool: &PgPool,
    user_id: Uuid,
    shop_id: Uuid,
) -> Result<(), FavoriteError> {
    let shop_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM shops WHERE id = $1)")
            .bind(shop_id)
            .fetch_one(pool)
            .await?;
    if !shop_exists {
        return Err(FavoriteError::NotFound("Shop"));
    }

    let result = sqlx::query(
        "INSERT INTO shop_favorites (user_id, shop_id) VALUES ($1, $2) \
         ON CONFLICT (user_id, shop_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(shop_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(FavoriteError::AlreadyFavorite);
    }
    Ok(())
}

/// Remove a shop from a user's favorites.
#[instrument(skip(pool))]
pub async fn remove_shop_favorite(
    pool: &PgPool,
    user_id: Uuid,
    shop_id: Uuid,
) -> Result<(), FavoriteError> {
    let result = sqlx::query("DELETE FROM shop_favorites WHERE user_id = $1 AND shop_id = $2")
        .bind(user_id)
        .bind(shop_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(FavoriteError::NotFound("Favorite"));
    }
    Ok(())
}

/// List the shops a user has favorited, newest first.
#[instrument(skip(pool))]
pub async fn list_shop_favorites(pool: &PgPool, user_id: Uuid) -> Result<Vec<Shop>, FavoriteError> {
    let rows: Vec<ShopRow> = sqlx::query_as(
        "SELECT s.id, s.area_id, s.name, s.detail, s.image_path, s.homepage_url, \
                s.address, s.phone, s.created_at \
         FROM shop_favorites f JOIN shops s ON s.id = f.shop_id \
         WHERE f.user_id = $1 \
         ORDER BY f.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Whether the shop is in the user's favorites.
#[instrument(skip(pool))]
pub async fn shop_favorite_status(
    pool: &PgPool,
    user_id: Uuid,
    shop_id: Uuid,
) -> Result<bool, FavoriteError> {
    let is_favorite: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM shop_favorites WHERE user_id = $1 AND shop_id = $2)",
    )
    .bind(user_id)
    .bind(shop_id)
    .fetch_one(pool)
    .await?;

    Ok(is_favorite)
}

/// Add a menu item to a user's favorites.
#[instrument(skip(pool))]
pub async fn add_menu_favorite(
    pool: &PgPool,
    user_id: Uuid,
    menu_id: Uuid,
) -> Result<(), FavoriteError> {
    let menu_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM menus WHERE id = $1)")
            .bind(menu_id)
            .fetch_one(pool)
            .await?;
    if !menu_exists {
        return Err(FavoriteError::NotFound("Menu"));
    }

    let result = sqlx::query(
        "INSERT INTO menu_favorites (user_id, menu_id) VALUES ($1, $2) \
         ON CONFLICT (user_id, menu_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(menu_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(FavoriteError::AlreadyFavorite);
    }
    Ok(())
}

/// Remove a menu item from a user's favorites.
#[instrument(skip(pool))]
pub async fn remove_menu_favorite(
    pool: &PgPool,
    user_id: Uuid,
    menu_id: Uuid,
) -> Result<(), FavoriteError> {
    let result = sqlx::query("DELETE FROM menu_favorites WHERE user_id = $1 AND menu_id = $2")
        .bind(user_id)
        .bind(menu_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(FavoriteError::NotFound("Favorite"));
    }
    Ok(())
}

/// List the menu items a user has favorited, newest first.
#[instrument(skip(pool))]
pub async fn list_menu_favorites(pool: &PgPool, user_id: Uuid) -> Result<Vec<Menu>, FavoriteError> {
    let rows: Vec<MenuRow> = sqlx::query_as(
        "SELECT m.id, m.shop_id, m.name, m.description, m.price, m.category, m.image_url, \
                m.is_available, m.created_at, m.updated_at \
         FROM menu_favorites f JOIN menus m ON m.id = f.menu_id \
         WHERE f.user_id = $1 \
         ORDER BY f.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Whether the menu item is in the user's favorites.
#[instrument(skip(pool))]
pub async fn menu_favorite_status(
    pool: &PgPool,
    user_id: Uuid,
    menu_id: Uuid,
) -> Result<bool, FavoriteError> {
    let is_favorite: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM menu_favorites WHERE user_id = $1 AND menu_id = $2)",
    )
    .bind(user_id)
    .bind(menu_id)
    .fetch_one(pool)
    .await?;

    Ok(is_favorite)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the duplicate message matches the wire contract
    #[test]
    fn test_favorite_error_messages() {
        assert_eq!(
            FavoriteError::AlreadyFavorite.to_string(),
            "Already in favorites"
        );
        assert_eq!(FavoriteError::NotFound("Shop").to_string(), "Shop not found");
    }
}
