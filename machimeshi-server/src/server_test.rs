//! Tests for server assembly and logging configuration.

use super::server::*;
use crate::app_state::AppState;
use serde_json::Value;
use shared::config::server::{Config, LogFormat, LoggingConfig};
use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};
use tracing::{Subscriber, info};
use tracing_subscriber::fmt::{self, MakeWriter};

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn subscriber_with_writer<W>(config: &Config, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let default_level = config
        .logging
        .level
        .parse::<tracing::level_filters::LevelFilter>()
        .unwrap_or(tracing::level_filters::LevelFilter::INFO);
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let builder = fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(writer);

    if matches!(config.logging.format, LogFormat::Json) {
        Box::new(builder.json().with_ansi(false).finish())
    } else {
        Box::new(builder.with_ansi(true).finish())
    }
}

#[test]
fn json_log_format_produces_json_output() {
    let config = Config {
        logging: LoggingConfig {
            format: LogFormat::Json,
            ..LoggingConfig::default()
        },
        ..Config::default()
    };

    let buffer = Arc::new(Mutex::new(Vec::new()));
    let make_writer = BufferMakeWriter {
        buffer: buffer.clone(),
    };

    let subscriber = subscriber_with_writer(&config, make_writer);
    let dispatch = tracing::dispatcher::Dispatch::new(subscriber);

    tracing::dispatcher::with_default(&dispatch, || {
        info!(event = "json_test", "log entry");
    });

    let contents = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    let line = contents
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap();
    let value: Value = serde_json::from_str(line).unwrap();
    assert_eq!(value["fields"]["message"], "log entry");
    assert_eq!(value["fields"]["event"], "json_test");
}

#[test]
fn text_log_format_emits_plain_events() {
    let config = Config::default();

    let buffer = Arc::new(Mutex::new(Vec::new()));
    let make_writer = BufferMakeWriter {
        buffer: buffer.clone(),
    };

    let subscriber = subscriber_with_writer(&config, make_writer);
    let dispatch = tracing::dispatcher::Dispatch::new(subscriber);

    tracing::dispatcher::with_default(&dispatch, || {
        info!(event = "text_test", "log entry");
    });

    let contents = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    let line = contents
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap();
    assert!(
        serde_json::from_str::<Value>(line).is_err(),
        "expected plain text log line"
    );
    assert!(line.contains("log entry"));
}

#[test]
fn api_router_registers_routes() {
    let state = Arc::new(AppState::default());
    let router = create_api_router(&state, &Config::default());
    assert!(router.has_routes(), "Router should not be empty");
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_payload() {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    let metrics_handle = metrics_handle();
    let config = Arc::new(Config::default());
    let app_state = Arc::new(AppState::default());

    let app = create_app_router(app_state, config, metrics_handle);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert_eq!(content_type, "text/plain; version=0.0.4");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(
        body.contains("# HELP") || body.is_empty() || body.contains("# TYPE"),
        "expected prometheus exposition format body"
    );
}

#[tokio::test]
async fn protected_routes_reject_anonymous_requests() {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    let metrics_handle = metrics_handle();
    let config = Arc::new(Config::default());
    let app_state = Arc::new(AppState::default());

    let app = create_app_router(app_state, config, metrics_handle);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/notifications")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get(axum::http::header::WWW_AUTHENTICATE)
            .and_then(|value| value.to_str().ok()),
        Some("Bearer")
    );
}

#[tokio::test]
async fn responses_carry_the_request_id_header() {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    let metrics_handle = metrics_handle();
    let config = Arc::new(Config::default());
    let app_state = Arc::new(AppState::default());

    let app = create_app_router(app_state, config, metrics_handle);

    // A caller-supplied id is echoed back.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok()),
        Some("req-42")
    );

    // Without one, the middleware assigns a fresh id.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
