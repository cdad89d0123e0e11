//! Repository for the `notifications` table.

use sqlx::PgPool;
use stafflink_core::types::DbId;

use crate::models::notification::{CreateNotification, Notification};

/// Column list for `notifications` queries.
const COLUMNS: &str =
    "id, recipient_user_id, title, body, link, is_read, read_at, created_at";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Unconditional insert, returning the created row.
    ///
    /// This is the low-level primitive used for one-off request-decision
    /// messages; each decision is a unique event, so duplicates are fine.
    /// Dedup-sensitive producers check [`exists_unread`] first.
    ///
    /// [`exists_unread`]: NotificationRepo::exists_unread
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (recipient_user_id, title, body, link)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.recipient_user_id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.link)
            .fetch_one(pool)
            .await
    }

    /// Whether the recipient already has an unread notification with the
    /// exact title and link. The dedup existence check.
    pub async fn exists_unread(
        pool: &PgPool,
        recipient_user_id: DbId,
        title: &str,
        link: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM notifications
                WHERE recipient_user_id = $1
                  AND title = $2
                  AND link = $3
                  AND is_read = false
             )",
        )
        .bind(recipient_user_id)
        .bind(title)
        .bind(link)
        .fetch_one(pool)
        .await
    }

    /// Bulk-mark every matching unread notification read for a recipient.
    ///
    /// Returns the number of rows marked. Used to consume "QR refresh
    /// required" items when the admin regenerates the token.
    pub async fn mark_matching_read(
        pool: &PgPool,
        recipient_user_id: DbId,
        title: &str,
        link: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications
             SET is_read = true, read_at = NOW()
             WHERE recipient_user_id = $1
               AND title = $2
               AND link = $3
               AND is_read = false",
        )
        .bind(recipient_user_id)
        .bind(title)
        .bind(link)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// List notifications for a recipient.
    ///
    /// When `unread_only` is `true`, only notifications with `is_read = false`
    /// are returned.
    pub async fn list_for_user(
        pool: &PgPool,
        recipient_user_id: DbId,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let filter = if unread_only {
            "AND is_read = false"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE recipient_user_id = $1 {filter}
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(recipient_user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark a single notification as read.
    ///
    /// Scoped to the recipient's own inbox: `None` when the notification
    /// does not exist or belongs to someone else. Re-marking a read row is
    /// an idempotent no-op that still returns the row.
    pub async fn mark_read(
        pool: &PgPool,
        notification_id: DbId,
        recipient_user_id: DbId,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications
             SET is_read = true, read_at = COALESCE(read_at, NOW())
             WHERE id = $1 AND recipient_user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(notification_id)
            .bind(recipient_user_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark all unread notifications as read for a recipient.
    ///
    /// Returns the number of notifications that were marked read.
    pub async fn mark_all_read(
        pool: &PgPool,
        recipient_user_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications
             SET is_read = true, read_at = NOW()
             WHERE recipient_user_id = $1 AND is_read = false",
        )
        .bind(recipient_user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Get the number of unread notifications for a recipient.
    pub async fn unread_count(
        pool: &PgPool,
        recipient_user_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications
             WHERE recipient_user_id = $1 AND is_read = false",
        )
        .bind(recipient_user_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
