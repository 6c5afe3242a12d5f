//! Account registration, login, and profile flows for both user populations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use shared::models::{
    RegisterShopAccountRequest, RegisterUserRequest, ShopAccount, UpdateProfileRequest, User,
};

use crate::auth::passwords::{self, PasswordError};

/// Errors produced by the account flows.
#[derive(Debug, Error)]
pub enum AccountError {
    /// The requested username is already taken.
    #[error("Username already registered")]
    DuplicateUsername,

    /// The requested email is already taken.
    #[error("Email already registered")]
    DuplicateEmail,

    /// Login credentials did not match any account.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// The account does not exist.
    #[error("Account not found")]
    NotFound,

    /// The shop a new shop account should manage does not exist.
    #[error("Shop not found")]
    ShopNotFound,

    /// Password hashing or verification failed.
    #[error("{0}")]
    Hash(String),

    /// An underlying database failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<PasswordError> for AccountError {
    fn from(err: PasswordError) -> Self {
        Self::Hash(err.to_string())
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    address: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            address: row.address,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ShopAccountRow {
    id: Uuid,
    shop_id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<ShopAccountRow> for ShopAccount {
    fn from(row: ShopAccountRow) -> Self {
        Self {
            id: row.id,
            shop_id: row.shop_id,
            username: row.username,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

/// Register a general user account.
#[instrument(skip(pool, request), fields(username = %request.username))]
pub async fn register_user(
    pool: &PgPool,
    request: &RegisterUserRequest,
) -> Result<User, AccountError> {
    let username_taken: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(&request.username)
            .fetch_one(pool)
            .await?;
    if username_taken {
        return Err(AccountError::DuplicateUsername);
    }

    let email_taken: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(&request.email)
            .fetch_one(pool)
            .await?;
    if email_taken {
        return Err(AccountError::DuplicateEmail);
    }

    let password_hash = passwords::hash_password(&request.password)?;
    let row: UserRow = sqlx::query_as(
        "INSERT INTO users (username, email, address, password_hash) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, username, email, address, password_hash, created_at",
    )
    .bind(&request.username)
    .bind(&request.email)
    .bind(&request.address)
    .bind(&password_hash)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Register a shop account bound to an existing shop.
#[instrument(skip(pool, request), fields(username = %request.username, shop_id = %request.shop_id))]
pub async fn register_shop_account(
    pool: &PgPool,
    request: &RegisterShopAccountRequest,
) -> Result<ShopAccount, AccountError> {
    let shop_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM shops WHERE id = $1)")
            .bind(request.shop_id)
            .fetch_one(pool)
            .await?;
    if !shop_exists {
        return Err(AccountError::ShopNotFound);
    }

    let username_taken: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM shop_accounts WHERE username = $1)")
            .bind(&request.username)
            .fetch_one(pool)
            .await?;
    if username_taken {
        return Err(AccountError::DuplicateUsername);
    }

    let email_taken: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM shop_accounts WHERE email = $1)")
            .bind(&request.email)
            .fetch_one(pool)
            .await?;
    if email_taken {
        return Err(AccountError::DuplicateEmail);
    }

    let password_hash = passwords::hash_password(&request.password)?;
    let row: ShopAccountRow = sqlx::query_as(
        "INSERT INTO shop_accounts (shop_id, username, email, password_hash) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, shop_id, username, email, password_hash, created_at",
    )
    .bind(request.shop_id)
    .bind(&request.username)
    .bind(&request.email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Authenticate a general user by email and password.
#[instrument(skip_all)]
pub async fn login_user(pool: &PgPool, email: &str, password: &str) -> Result<User, AccountError> {
    let row: Option<UserRow> = sqlx::query_as(
        "SELECT id, username, email, address, password_hash, created_at \
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    let row = row.ok_or(AccountError::InvalidCredentials)?;
    if !passwords::verify_password(password, &row.password_hash)? {
        return Err(AccountError::InvalidCredentials);
    }

    Ok(row.into())
}

/// Authenticate a shop account by username and password.
#[instrument(skip_all)]
pub async fn login_shop(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<ShopAccount, AccountError> {
    let row: Option<ShopAccountRow> = sqlx::query_as(
        "SELECT id, shop_id, username, email, password_hash, created_at \
         FROM shop_accounts WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    let row = row.ok_or(AccountError::InvalidCredentials)?;
    if !passwords::verify_password(password, &row.password_hash)? {
        return Err(AccountError::InvalidCredentials);
    }

    Ok(row.into())
}

/// Fetch a general user's profile.
#[instrument(skip(pool))]
pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<User, AccountError> {
    let row: Option<UserRow> = sqlx::query_as(
        "SELECT id, username, email, address, password_hash, created_at \
         FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.map(Into::into).ok_or(AccountError::NotFound)
}

/// Fetch a shop account's profile.
#[instrument(skip(pool))]
pub async fn get_shop_account(
    pool: &PgPool,
    account_id: Uuid,
) -> Result<ShopAccount, AccountError> {
    let row: Option<ShopAccountRow> = sqlx::query_as(
        "SELECT id, shop_id, username, email, password_hash, created_at \
         FROM shop_accounts WHERE id = $1",
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await?;

    row.map(Into::into).ok_or(AccountError::NotFound)
}

/// Update a general user's profile. Absent fields are left unchanged.
#[instrument(skip(pool, request))]
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    request: &UpdateProfileRequest,
) -> Result<User, AccountError> {
    if let Some(username) = &request.username {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 AND id <> $2)",
        )
        .bind(username)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        if taken {
            return Err(AccountError::DuplicateUsername);
        }
    }

    if let Some(email) = &request.email {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND id <> $2)",
        )
        .bind(email)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        if taken {
            return Err(AccountError::DuplicateEmail);
        }
    }

    let row: Option<UserRow> = sqlx::query_as(
        "UPDATE users SET \
           username = COALESCE($2, username), \
           email = COALESCE($3, email), \
           address = COALESCE($4, address) \
         WHERE id = $1 \
         RETURNING id, username, email, address, password_hash, created_at",
    )
    .bind(user_id)
    .bind(&request.username)
    .bind(&request.email)
    .bind(&request.address)
    .fetch_optional(pool)
    .await?;

    row.map(Into::into).ok_or(AccountError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error messages match the wire contract
    #[test]
    fn test_account_error_messages() {
        assert_eq!(
            AccountError::DuplicateUsername.to_string(),
            "Username already registered"
        );
        assert_eq!(
            AccountError::InvalidCredentials.to_string(),
            "Incorrect email or password"
        );
        assert_eq!(AccountError::ShopNotFound.to_string(), "Shop not found");
    }

    /// Test password failures carry the underlying message
    #[test]
    fn test_password_error_conversion() {
        let error = AccountError::from(PasswordError::Malformed);
        assert!(matches!(error, AccountError::Hash(_)));
        assert_eq!(error.to_string(), "stored password hash is malformed");
    }
}
