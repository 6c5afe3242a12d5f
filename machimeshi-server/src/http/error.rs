use axum::{http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;

use super::problem::ProblemDetails;
use crate::auth::tokens::TokenError;
use crate::services::account_service::AccountError;
use crate::services::favorite_service::FavoriteError;
use crate::services::menu_service::MenuError;
use crate::services::notification_service::NotificationError;
use crate::services::shop_service::ShopError;

pub type AppResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized", message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, "forbidden", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_failed",
            message,
        )
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, "unavailable", message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let details = self.details;

        let mut problem = ProblemDetails::new(self.status, self.code, self.message);
        if let Some(details) = details {
            problem = problem.with_details(details);
        }

        problem.into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(value: anyhow::Error) -> Self {
        Self::internal_server_error(value.to_string())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let code = db_err
                .code()
                .unwrap_or_else(|| std::borrow::Cow::Borrowed("unknown"));
            let message = format!("database error {code}");
            return Self::internal_server_error(message)
                .with_details(json!({ "sqlstate": code, "message": db_err.message() }));
        }

        Self::internal_server_error(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => Self::forbidden(err.to_string()),
            _ => Self::internal_server_error(err.to_string()),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired | TokenError::Invalid => {
                Self::new(StatusCode::UNAUTHORIZED, "invalid_token", err.to_string())
            }
            TokenError::Signing => Self::internal_server_error(err.to_string()),
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::DuplicateUsername | AccountError::DuplicateEmail => {
                Self::new(StatusCode::BAD_REQUEST, "already_registered", err.to_string())
            }
            AccountError::InvalidCredentials => Self::unauthorized(err.to_string()),
            AccountError::NotFound | AccountError::ShopNotFound => Self::not_found(err.to_string()),
            AccountError::Hash(message) => Self::internal_server_error(message),
            AccountError::Database(db_err) => Self::from(db_err),
        }
    }
}

impl From<MenuError> for ApiError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::NotFound => Self::not_found(err.to_string()),
            MenuError::Validation(message) => Self::unprocessable_entity(message),
            MenuError::Forbidden(message) => Self::forbidden(message),
            MenuError::Database(db_err) => Self::from(db_err),
        }
    }
}

impl From<ShopError> for ApiError {
    fn from(err: ShopError) -> Self {
        match err {
            ShopError::NotFound => Self::not_found(err.to_string()),
            ShopError::Forbidden(message) => Self::forbidden(message),
            ShopError::Database(db_err) => Self::from(db_err),
        }
    }
}

impl From<FavoriteError> for ApiError {
    fn from(err: FavoriteError) -> Self {
        match err {
            FavoriteError::AlreadyFavorite => {
                Self::new(StatusCode::BAD_REQUEST, "already_favorite", err.to_string())
            }
            FavoriteError::NotFound(_) => Self::not_found(err.to_string()),
            FavoriteError::Database(db_err) => Self::from(db_err),
        }
    }
}

impl From<NotificationError> for ApiError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::NotFound => Self::not_found(err.to_string()),
            NotificationError::Database(db_err) => Self::from(db_err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::CONTENT_TYPE;

    #[test]
    fn constructors_set_status_and_code() {
        let error = ApiError::forbidden("nope").with_details(json!({ "reason": "policy" }));
        assert_eq!(error.status, StatusCode::FORBIDDEN);
        assert_eq!(error.code, "forbidden");
        assert_eq!(error.message, "nope");
        assert!(error.details.is_some());
    }

    #[test]
    fn response_carries_problem_body() {
        let response = ApiError::not_found("Menu not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("application/problem+json")
        );
    }

    #[test]
    fn account_errors_map_to_expected_statuses() {
        let duplicate = ApiError::from(AccountError::DuplicateUsername);
        assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);

        let credentials = ApiError::from(AccountError::InvalidCredentials);
        assert_eq!(credentials.status, StatusCode::UNAUTHORIZED);

        let missing = ApiError::from(AccountError::NotFound);
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn favorite_duplicate_maps_to_bad_request() {
        let error = ApiError::from(FavoriteError::AlreadyFavorite);
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "Already in favorites");
    }

    #[test]
    fn token_errors_map_to_unauthorized() {
        assert_eq!(
            ApiError::from(TokenError::Expired).status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(TokenError::Invalid).status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(TokenError::Signing).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn sqlx_database_errors_carry_sqlstate_details() {
        let error = ApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
