//! QR token entity model.

use serde::Serialize;
use sqlx::FromRow;
use stafflink_core::types::{DbId, Timestamp};

/// A row from the `qr_tokens` table.
///
/// At most one row per employee has `status = 'active'`. Revoked rows are
/// retained for history; "current" is always derived by querying for the
/// active row, never cached in process memory.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QrToken {
    pub id: DbId,
    pub employee_id: DbId,
    /// The bearer credential embedded in the public profile URL.
    pub token_value: String,
    pub status: String,
    /// `None` means the token never expires by time, only by revocation.
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
}
