use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, openapi::ApiDoc};

async fn openapi_yaml() -> impl IntoResponse {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => (StatusCode::OK, yaml),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("YAML error: {e}"),
        ),
    }
}

pub fn openapi_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/openapi/machimeshi.json", ApiDoc::openapi()))
        .route("/openapi/machimeshi.yaml", get(openapi_yaml))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_routes() {
        let router = openapi_routes();
        assert!(router.has_routes(), "Router should not be empty");
    }

    #[test]
    fn test_openapi_document_lists_core_paths() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths;
        assert!(paths.contains_key("/api/auth/login"));
        assert!(paths.contains_key("/api/auth/shop/login"));
        assert!(paths.contains_key("/api/menus"));
        assert!(paths.contains_key("/api/menus/{id}"));
        assert!(paths.contains_key("/api/menu_favorites"));
        assert!(paths.contains_key("/api/upload/image"));
    }
}
