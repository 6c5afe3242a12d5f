use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A notification delivered to an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Notification {
    /// Unique identifier for the notification.
    pub id: Uuid,

    /// The account the notification belongs to.
    pub user_id: Uuid,

    /// Short headline.
    pub title: String,

    /// Message body.
    pub body: String,

    /// Whether the account has read it.
    pub is_read: bool,

    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

/// Unread-count answer for the notification badge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct UnreadCount {
    /// Number of unread notifications.
    pub unread: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the unread answer keeps its wire field name
    #[test]
    fn test_unread_count_serialization() {
        let count = UnreadCount { unread: 4 };
        let json = serde_json::to_string(&count).unwrap();
        assert_eq!(json, r#"{"unread":4}"#);
    }
}
