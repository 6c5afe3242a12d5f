//! Registration, login, and profile handlers for both account populations.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use axum::extract::Extension;
use tracing::instrument;

use shared::models::{
    ErrorResponse, LoginRequest, RegisterShopAccountRequest, RegisterUserRequest, Role,
    ShopAccount, ShopLoginRequest, TokenResponse, UpdateProfileRequest, User,
};

use crate::{
    app_state::AppState,
    http::error::{ApiError, AppResult},
    middleware::request_context::RequestContext,
    services::account_service,
};

/// Register a general user account.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created", body = User),
        (status = 400, description = "Username or email already registered", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    require_filled(&[
        ("username", &payload.username),
        ("email", &payload.email),
        ("password", &payload.password),
    ])?;

    let user = account_service::register_user(state.db()?, &payload).await?;
    metrics::counter!("registrations_total", "kind" => "user").increment(1);
    Ok((StatusCode::CREATED, Json(user)))
}

/// Register a shop account bound to an existing shop.
#[utoipa::path(
    post,
    path = "/api/auth/shop/register",
    request_body = RegisterShopAccountRequest,
    responses(
        (status = 201, description = "Account created", body = ShopAccount),
        (status = 400, description = "Username or email already registered", body = ErrorResponse),
        (status = 404, description = "Shop not found", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, payload))]
pub async fn register_shop(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterShopAccountRequest>,
) -> AppResult<(StatusCode, Json<ShopAccount>)> {
    require_filled(&[
        ("username", &payload.username),
        ("email", &payload.email),
        ("password", &payload.password),
    ])?;

    let account = account_service::register_shop_account(state.db()?, &payload).await?;
    metrics::counter!("registrations_total", "kind" => "shop").increment(1);
    Ok((StatusCode::CREATED, Json(account)))
}

/// General login by email and password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = TokenResponse),
        (status = 401, description = "Incorrect email or password", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    require_filled(&[("email", &payload.email), ("password", &payload.password)])?;

    let user = match account_service::login_user(
        state.db()?,
        payload.email.trim(),
        &payload.password,
    )
    .await
    {
        Ok(user) => user,
        Err(err) => {
            metrics::counter!("logins_total", "kind" => "user", "status" => "error")
                .increment(1);
            return Err(err.into());
        }
    };

    let token = state.tokens.issue(user.id, Role::GeneralUser)?;
    metrics::counter!("logins_total", "kind" => "user", "status" => "ok").increment(1);
    Ok(Json(TokenResponse::bearer(token, Role::GeneralUser)))
}

/// Shop login by username and password.
#[utoipa::path(
    post,
    path = "/api/auth/shop/login",
    request_body = ShopLoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = TokenResponse),
        (status = 401, description = "Incorrect username or password", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, payload))]
pub async fn shop_login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ShopLoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    require_filled(&[
        ("username", &payload.username),
        ("password", &payload.password),
    ])?;

    let account = match account_service::login_shop(
        state.db()?,
        payload.username.trim(),
        &payload.password,
    )
    .await
    {
        Ok(account) => account,
        Err(err) => {
            metrics::counter!("logins_total", "kind" => "shop", "status" => "error")
                .increment(1);
            return Err(err.into());
        }
    };

    let token = state.tokens.issue(account.id, Role::ShopUser)?;
    metrics::counter!("logins_total", "kind" => "shop", "status" => "ok").increment(1);
    Ok(Json(TokenResponse::bearer(token, Role::ShopUser)))
}

/// Profile of the general-user bearer.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The bearer's profile", body = User),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Shop accounts use the shop profile endpoint", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, context))]
pub async fn me(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
) -> AppResult<Json<User>> {
    let account = context.require_account()?;
    account.require_general()?;
    let user = account_service::get_user(state.db()?, account.id).await?;
    Ok(Json(user))
}

/// Profile of the shop-account bearer.
#[utoipa::path(
    get,
    path = "/api/auth/shop/me",
    responses(
        (status = 200, description = "The bearer's shop account", body = ShopAccount),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "General accounts use the user profile endpoint", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, context))]
pub async fn shop_me(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
) -> AppResult<Json<ShopAccount>> {
    let account = context.require_account()?;
    account.require_shop()?;
    let shop_account = account_service::get_shop_account(state.db()?, account.id).await?;
    Ok(Json(shop_account))
}

/// Update the general-user bearer's profile.
#[utoipa::path(
    put,
    path = "/api/auth/me",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = User),
        (status = 400, description = "Username or email already registered", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, context, payload))]
pub async fn update_me(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<User>> {
    let account = context.require_account()?;
    account.require_general()?;
    let user = account_service::update_profile(state.db()?, account.id, &payload).await?;
    Ok(Json(user))
}

fn require_filled(fields: &[(&'static str, &str)]) -> AppResult<()> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ApiError::unprocessable_entity(format!(
                "{name} is required"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test blank required fields are rejected before any query
    #[test]
    fn test_require_filled() {
        assert!(require_filled(&[("email", "a@b.jp"), ("password", "x")]).is_ok());
        assert!(require_filled(&[("email", "   ")]).is_err());
        assert!(require_filled(&[("password", "")]).is_err());
    }
}
