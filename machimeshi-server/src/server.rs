//! Server assembly: tracing, database pool, router stack, and the run loop.

use std::{
    net::SocketAddr,
    sync::{Arc, OnceLock},
    time::Duration,
};

use axum::{Extension, Router, http::StatusCode, middleware, response::IntoResponse, routing::get, serve};
use axum::http::{HeaderValue, header};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt};

use shared::config::server::{Config, DatabaseConfig, LogFormat};

use crate::{
    app_state::AppState,
    db::bootstrap,
    middleware::{
        auth::require_auth,
        request_context::{self, RequestIdState},
    },
    routes,
    tracer,
};

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub(crate) fn metrics_handle() -> PrometheusHandle {
    PROMETHEUS_HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

async fn metrics_endpoint(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; version=0.0.4"),
        )],
        handle.render(),
    )
}

/// Initializes the tracing subscriber for logging using the provided configuration.
pub fn initialize_tracing(config: &Config) -> String {
    let env_filter = build_env_filter(config);

    let fmt_builder = fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    if matches!(config.logging.format, LogFormat::Json) {
        fmt_builder.json().with_ansi(false).init();
    } else {
        fmt_builder.with_ansi(true).init();
    }

    config.logging.level.clone()
}

fn build_env_filter(config: &Config) -> EnvFilter {
    let default_level = config
        .logging
        .level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy()
    })
}

/// Creates a database connection pool from the given database settings.
///
/// # Errors
/// Returns an error if the database connection pool cannot be created.
pub async fn create_database_pool(db: &DatabaseConfig) -> Result<sqlx::PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(db.max_connections)
        .connect(&db.url)
        .await?;
    metrics::gauge!("db_pool_max_connections").set(f64::from(db.max_connections));
    Ok(pool)
}

/// Creates the application state with the given database pool.
#[must_use]
pub fn create_app_state(config: &Config, pool: Option<sqlx::PgPool>) -> Arc<AppState> {
    Arc::new(AppState::from_config(config, pool))
}

/// Creates the CORS layer for the application.
#[must_use]
pub fn create_cors_layer(config: &Config) -> CorsLayer {
    use http::Method;

    let methods = vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let mut cors = CorsLayer::new()
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::any())
        .allow_credentials(config.server.cors.allow_credentials)
        .max_age(Duration::from_secs(600));

    if config.server.cors.allowed_origins.is_empty()
        || config
            .server
            .cors
            .allowed_origins
            .iter()
            .any(|origin| origin == "*")
    {
        cors = cors.allow_origin(AllowOrigin::any());
    } else {
        let origins = config
            .server
            .cors
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect::<Vec<_>>();
        cors = cors.allow_origin(AllowOrigin::list(origins));
    }

    cors
}

/// Creates the API router: the open account routes plus the bearer-gated
/// route groups.
pub fn create_api_router(state: &Arc<AppState>, config: &Config) -> Router<Arc<AppState>> {
    Router::new()
        .merge(routes::auth::create_router_auth())
        .merge(
            routes::protected::create_router_protected(&config.uploads).route_layer(
                middleware::from_fn_with_state(state.clone(), require_auth),
            ),
        )
}

/// Creates the static file service for serving frontend assets with an SPA
/// fallback, plus the uploaded-image directory.
pub fn create_static_service<S>(config: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    use axum::routing::get_service;

    let uploads_public = config.uploads.public_base.trim_end_matches('/');

    Router::new()
        .nest_service(
            if uploads_public.is_empty() {
                "/static/images"
            } else {
                uploads_public
            },
            ServeDir::new(config.uploads.dir.clone()),
        )
        .fallback_service(
            ServeDir::new(config.web.static_dir.clone())
                .append_index_html_on_directories(true)
                .fallback(get_service(ServeFile::new(config.web.spa_index.clone()))),
        )
}

/// Creates the main application router with all middleware and routes.
#[must_use]
pub fn create_app_router(
    state: Arc<AppState>,
    config: Arc<Config>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let api_router = create_api_router(&state, &config);
    let static_files_service = create_static_service(&config);

    let cors = create_cors_layer(&config);
    let request_id_state = RequestIdState::from_config(&config);

    // Layers go on after the routes: `Router::layer` only wraps routes that
    // are already registered.
    Router::new()
        .nest("/api", api_router)
        .merge(routes::health::create_health_router())
        .route("/metrics", get(metrics_endpoint))
        .merge(routes::openapi::openapi_routes())
        .merge(static_files_service)
        .layer(Extension(config.clone()))
        .layer(Extension(metrics_handle))
        .layer(cors)
        .layer(tracer::create_trace_layer())
        .layer(middleware::from_fn_with_state(
            request_id_state,
            request_context::assign_request_id,
        ))
        .with_state(state)
}

/// Creates the graceful shutdown signal handler.
pub async fn create_shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    info!("Shutting down...");
}

/// Starts the backend server and binds it to the configured port.
///
/// # Errors
/// Returns an error if the server fails to start.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    initialize_tracing(&config);
    info!("Starting server...");

    let metrics_handle = metrics_handle();
    let config = Arc::new(config);

    // Set up database connection pool
    let pool = create_database_pool(&config.db)
        .await
        .map_err(|err| -> Box<dyn std::error::Error> { Box::new(err) })?;

    // Run database bootstrap and health checks
    bootstrap::ensure_liveness(&pool)
        .await
        .map_err(|err| -> Box<dyn std::error::Error> { Box::new(err) })?;

    bootstrap::run(&pool, &config.db)
        .await
        .map_err(|err| -> Box<dyn std::error::Error> { Box::new(err) })?;

    bootstrap::ensure_readiness(&pool)
        .await
        .map_err(|err| -> Box<dyn std::error::Error> { Box::new(err) })?;

    // Create application state and the router
    let state = create_app_state(&config, Some(pool));
    let app = create_app_router(state, config.clone(), metrics_handle.clone());

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    let shutdown_signal = create_shutdown_signal();

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}
