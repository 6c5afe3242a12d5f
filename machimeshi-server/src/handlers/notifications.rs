//! Notification handlers backing the header bell.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use shared::models::{ErrorResponse, MessageResponse, Notification, UnreadCount};

use crate::{
    app_state::AppState, http::error::AppResult,
    middleware::request_context::RequestContext, services::notification_service,
};

/// List the bearer's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "The bearer's notifications", body = [Notification]),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse)
    ),
    tag = "Notifications"
)]
#[instrument(skip(state, context))]
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
) -> AppResult<Json<Vec<Notification>>> {
    let account = context.require_account()?;
    let notifications =
        notification_service::list_notifications(state.db()?, account.id).await?;
    Ok(Json(notifications))
}

/// Count the bearer's unread notifications.
#[utoipa::path(
    get,
    path = "/api/notifications/unread_count",
    responses(
        (status = 200, description = "Unread count", body = UnreadCount)
    ),
    tag = "Notifications"
)]
#[instrument(skip(state, context))]
pub async fn unread_count(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
) -> AppResult<Json<UnreadCount>> {
    let account = context.require_account()?;
    let unread = notification_service::unread_count(state.db()?, account.id).await?;
    Ok(Json(UnreadCount { unread }))
}

/// Mark one of the bearer's notifications as read.
#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read",
    params(("id" = Uuid, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Marked read", body = MessageResponse),
        (status = 404, description = "Notification not found", body = ErrorResponse)
    ),
    tag = "Notifications"
)]
#[instrument(skip(state, context))]
pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let account = context.require_account()?;
    notification_service::mark_read(state.db()?, account.id, id).await?;
    Ok(Json(MessageResponse::new("Notification marked as read")))
}
