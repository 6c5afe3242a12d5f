//! Per-account notifications backing the header bell.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use shared::models::Notification;

/// Errors produced by the notification flows.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The notification does not exist or belongs to another account.
    #[error("Notification not found")]
    NotFound,

    /// An underlying database failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(sqlx::FromRow)]
struct NotificationRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    body: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            body: row.body,
            is_read: row.is_read,
            created_at: row.created_at,
        }
    }
}

/// List an account's notifications, newest first.
#[instrument(skip(pool))]
pub async fn list_notifications(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Notification>, NotificationError> {
    let rows: Vec<NotificationRow> = sqlx::query_as(
        "SELECT id, user_id, title, body, is_read, created_at \
         FROM notifications WHERE user_id = $1 \
         ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Count an account's unread notifications.
#[instrument(skip(pool))]
pub async fn unread_count(pool: &PgPool, user_id: Uuid) -> Result<i64, NotificationError> {
    let unread: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND NOT is_read",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(unread)
}

/// Mark one of the account's notifications as read.
#[instrument(skip(pool))]
pub async fn mark_read(
    pool: &PgPool,
    user_id: Uuid,
    notification_id: Uuid,
) -> Result<(), NotificationError> {
    let result = sqlx::query(
        "UPDATE notifications SET is_read = TRUE WHERE id = $1 AND user_id = $2",
    )
    .bind(notification_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(NotificationError::NotFound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the not-found message
    #[test]
    fn test_notification_error_message() {
        assert_eq!(
            NotificationError::NotFound.to_string(),
            "Notification not found"
        );
    }
}
