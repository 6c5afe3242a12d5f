use shared::config::server::{AuthConfig, Config, UploadConfig};

use crate::auth::tokens::TokenService;
use crate::http::error::{ApiError, AppResult};

// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub(crate) pool: Option<sqlx::PgPool>,
    pub(crate) tokens: TokenService,
    pub(crate) uploads: UploadConfig,
}

impl AppState {
    /// Build the state from resolved configuration and an optional pool.
    pub fn from_config(config: &Config, pool: Option<sqlx::PgPool>) -> Self {
        Self {
            pool,
            tokens: TokenService::from_config(&config.auth),
            uploads: config.uploads.clone(),
        }
    }

    /// The database pool, or a service-unavailable error when the server
    /// runs without one.
    pub fn db(&self) -> AppResult<&sqlx::PgPool> {
        self.pool
            .as_ref()
            .ok_or_else(|| ApiError::service_unavailable("database is not available"))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            pool: None,
            tokens: TokenService::from_config(&AuthConfig::default()),
            uploads: UploadConfig::default(),
        }
    }
}
