//! Notification entity models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use stafflink_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
///
/// Rows are never deleted; recipients flip `is_read`. Consumers poll -- there
/// is no push channel.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub recipient_user_id: DbId,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new notification.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub recipient_user_id: DbId,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
}
