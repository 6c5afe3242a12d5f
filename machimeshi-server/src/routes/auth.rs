use std::sync::Arc;

use axum::{Router, routing::post};
use tracing::info;

use crate::{
    app_state::AppState,
    handlers::auth::{login, register, register_shop, shop_login},
};

/// Register the unauthenticated account routes.
pub fn create_router_auth() -> Router<Arc<AppState>> {
    info!("Creating auth router");
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/shop/register", post(register_shop))
        .route("/auth/login", post(login))
        .route("/auth/shop/login", post(shop_login))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_router_auth() {
        let router = create_router_auth();
        assert!(router.has_routes(), "Router should not be empty");
    }
}
