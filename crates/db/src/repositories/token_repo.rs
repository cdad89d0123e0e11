//! Repository for the `qr_tokens` table.

use sqlx::PgPool;
use stafflink_core::status::TokenStatus;
use stafflink_core::types::{DbId, Timestamp};

use crate::models::token::QrToken;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, employee_id, token_value, status, expires_at, created_at, revoked_at";

/// Provides lifecycle operations for QR tokens.
///
/// "Current active" is always re-derived from the store by status filter, so
/// the single-active-token invariant survives process restarts and
/// concurrent callers.
pub struct TokenRepo;

impl TokenRepo {
    /// Insert a new active token, returning the created row.
    pub async fn insert_active(
        pool: &PgPool,
        employee_id: DbId,
        token_value: &str,
        expires_at: Option<Timestamp>,
    ) -> Result<QrToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO qr_tokens (employee_id, token_value, status, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QrToken>(&query)
            .bind(employee_id)
            .bind(token_value)
            .bind(TokenStatus::Active.as_str())
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Flip every active token for the employee to revoked.
    ///
    /// Bulk update by (employee_id, status) filter: affects 0 or 1 rows under
    /// a healthy invariant, and repairs any excess rows if the invariant was
    /// broken upstream. Returns the affected rows, most recent first.
    pub async fn revoke_active(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<QrToken>, sqlx::Error> {
        let query = format!(
            "UPDATE qr_tokens
             SET status = $2, revoked_at = NOW()
             WHERE employee_id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QrToken>(&query)
            .bind(employee_id)
            .bind(TokenStatus::Revoked.as_str())
            .bind(TokenStatus::Active.as_str())
            .fetch_all(pool)
            .await
    }

    /// List all active tokens for an employee, most recent first.
    ///
    /// Callers treat more than one row as a broken-invariant anomaly.
    pub async fn list_active(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<QrToken>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM qr_tokens
             WHERE employee_id = $1 AND status = $2
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, QrToken>(&query)
            .bind(employee_id)
            .bind(TokenStatus::Active.as_str())
            .fetch_all(pool)
            .await
    }

    /// Most recent token of any status, for "last known" display when no
    /// token is active.
    pub async fn find_latest(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Option<QrToken>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM qr_tokens
             WHERE employee_id = $1
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, QrToken>(&query)
            .bind(employee_id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve an active, unexpired token by its bearer value.
    ///
    /// Used by the public profile endpoint; revoked and time-expired tokens
    /// resolve to nothing.
    pub async fn find_live_by_value(
        pool: &PgPool,
        token_value: &str,
    ) -> Result<Option<QrToken>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM qr_tokens
             WHERE token_value = $1
               AND status = $2
               AND (expires_at IS NULL OR expires_at > NOW())"
        );
        sqlx::query_as::<_, QrToken>(&query)
            .bind(token_value)
            .bind(TokenStatus::Active.as_str())
            .fetch_optional(pool)
            .await
    }
}
