//! Menu item listing, search, and the shop-side management flows.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use shared::models::{CreateMenuRequest, Menu, MenuPage, MenuQuery, UpdateMenuRequest};

/// Longest accepted menu item name.
const MAX_NAME_LEN: usize = 100;

/// Errors produced by the menu flows.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The menu item does not exist.
    #[error("Menu not found")]
    NotFound,

    /// The request failed validation.
    #[error("{0}")]
    Validation(String),

    /// The bearer does not manage the owning shop.
    #[error("{0}")]
    Forbidden(String),

    /// An underlying database failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
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

const MENU_COLUMNS: &str = "id, shop_id, name, description, price, category, image_url, \
                            is_available, created_at, updated_at";

const MENU_FILTER: &str = "($1::text IS NULL OR category = $1) \
     AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%' OR description ILIKE '%' || $2 || '%') \
     AND (NOT $3 OR is_available) \
     AND ($4::uuid IS NULL OR shop_id = $4)";

/// List menu items matching the query, one page at a time.
#[instrument(skip(pool))]
pub async fn list_menus(pool: &PgPool, query: &MenuQuery) -> Result<MenuPage, MenuError> {
    query.validate().map_err(MenuError::Validation)?;

    let total: i64 = sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM menus WHERE {MENU_FILTER}"
    ))
    .bind(&query.category)
    .bind(&query.search)
    .bind(query.available_only)
    .bind(query.shop_id)
    .fetch_one(pool)
    .await?;

    let rows: Vec<MenuRow> = sqlx::query_as(&format!(
        "SELECT {MENU_COLUMNS} FROM menus WHERE {MENU_FILTER} \
         ORDER BY created_at DESC LIMIT $5 OFFSET $6",
    ))
    .bind(&query.category)
    .bind(&query.search)
    .bind(query.available_only)
    .bind(query.shop_id)
    .bind(i64::from(query.per_page))
    .bind(query.offset())
    .fetch_all(pool)
    .await?;

    Ok(MenuPage {
        items: rows.into_iter().map(Into::into).collect(),
        total,
        page: query.page,
        per_page: query.per_page,
    })
}

/// Fetch one menu item.
#[instrument(skip(pool))]
pub async fn get_menu(pool: &PgPool, menu_id: Uuid) -> Result<Menu, MenuError> {
    let row: Option<MenuRow> =
        sqlx::query_as(&format!("SELECT {MENU_COLUMNS} FROM menus WHERE id = $1"))
            .bind(menu_id)
            .fetch_optional(pool)
            .await?;

    row.map(Into::into).ok_or(MenuError::NotFound)
}

/// Create a menu item under the shop the bearer's account manages.
#[instrument(skip(pool, request), fields(name = %request.name))]
pub async fn create_menu(
    pool: &PgPool,
    account_id: Uuid,
    request: &CreateMenuRequest,
) -> Result<Menu, MenuError> {
    validate_fields(&request.name, request.price)?;
    let shop_id = managed_shop(pool, account_id).await?;

    let row: MenuRow = sqlx::query_as(&format!(
        "INSERT INTO menus (shop_id, name, description, price, category, image_url, is_available) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING {MENU_COLUMNS}",
    ))
    .bind(shop_id)
    .bind(&request.name)
    .bind(&request.description)
    .bind(request.price)
    .bind(&request.category)
    .bind(&request.image_url)
    .bind(request.is_available)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Partially update a menu item the bearer's shop owns.
#[instrument(skip(pool, request))]
pub async fn update_menu(
    pool: &PgPool,
    account_id: Uuid,
    menu_id: Uuid,
    request: &UpdateMenuRequest,
) -> Result<Menu, MenuError> {
    if let Some(name) = &request.name {
        validate_fields(name, request.price.unwrap_or(0))?;
    } else if let Some(price) = request.price {
        validate_fields("valid", price)?;
    }

    let shop_id = managed_shop(pool, account_id).await?;
    ensure_ownership(pool, menu_id, shop_id).await?;

    let row: Option<MenuRow> = sqlx::query_as(&format!(
        "UPDATE menus SET \
           name = COALESCE($2, name), \
           description = COALESCE($3, description), \
           price = COALESCE($4, price), \
           category = COALESCE($5, category), \
           image_url = COALESCE($6, image_url), \
           is_available = COALESCE($7, is_available), \
           updated_at = now() \
         WHERE id = $1 \
         RETURNING {MENU_COLUMNS}",
    ))
    .bind(menu_id)
    .bind(&request.name)
    .bind(&request.description)
    .bind(request.price)
    .bind(&request.category)
    .bind(&request.image_url)
    .bind(request.is_available)
    .fetch_optional(pool)
    .await?;

    row.map(Into::into).ok_or(MenuError::NotFound)
}

/// Delete a menu item the bearer's shop owns.
#[instrument(skip(pool))]
pub async fn delete_menu(pool: &PgPool, account_id: Uuid, menu_id: Uuid) -> Result<(), MenuError> {
    let shop_id = managed_shop(pool, account_id).await?;
    ensure_ownership(pool, menu_id, shop_id).await?;

    let result = sqlx::query("DELETE FROM menus WHERE id = $1")
        .bind(menu_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MenuError::NotFound);
    }
    Ok(())
}

async fn managed_shop(pool: &PgPool, account_id: Uuid) -> Result<Uuid, MenuError> {
    let shop_id: Option<Uuid> =
        sqlx::query_scalar("SELECT shop_id FROM shop_accounts WHERE id = $1")
            .bind(account_id)
            .fetch_optional(pool)
            .await?;

    shop_id.ok_or_else(|| MenuError::Forbidden("shop account required".to_string()))
}

async fn ensure_ownership(pool: &PgPool, menu_id: Uuid, shop_id: Uuid) -> Result<(), MenuError> {
    let owner: Option<Uuid> = sqlx::query_scalar("SELECT shop_id FROM menus WHERE id = $1")
        .bind(menu_id)
        .fetch_optional(pool)
        .await?;

    match owner {
        None => Err(MenuError::NotFound),
        Some(owner) if owner == shop_id => Ok(()),
        Some(_) => Err(MenuError::Forbidden(
            "cannot manage another shop's menu".to_string(),
        )),
    }
}

fn validate_fields(name: &str, price: i32) -> Result<(), MenuError> {
    if name.trim().is_empty() {
        return Err(MenuError::Validation("name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(MenuError::Validation(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if price < 0 {
        return Err(MenuError::Validation(
            "price must not be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the not-found message matches the wire contract
    #[test]
    fn test_menu_error_messages() {
        assert_eq!(MenuError::NotFound.to_string(), "Menu not found");
    }

    /// Test name and price bounds
    #[test]
    fn test_validate_fields() {
        assert!(validate_fields("Shoyu Ramen", 900).is_ok());
        assert!(validate_fields("", 900).is_err());
        assert!(validate_fields("   ", 900).is_err());
        assert!(validate_fields("Shoyu Ramen", -1).is_err());
        assert!(validate_fields(&"x".repeat(MAX_NAME_LEN), 0).is_ok());
        assert!(validate_fields(&"x".repeat(MAX_NAME_LEN + 1), 0).is_err());
    }
}
