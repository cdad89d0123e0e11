//! Audit log entity models and DTOs.
//!
//! Audit logs are append-only and have no `updated_at` (immutable records).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflink_core::types::{DbId, Timestamp};

/// A single audit log entry. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub action: String,
    pub actor_user_id: Option<DbId>,
    pub target_type: String,
    pub target_id: Option<DbId>,
    /// Opaque structured payload (old/new values, ids). Schema-free from the
    /// recorder's point of view, stable enough to reconstruct "what changed".
    pub details: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new audit log entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub action: String,
    pub actor_user_id: Option<DbId>,
    pub target_type: String,
    pub target_id: Option<DbId>,
    pub details: Option<serde_json::Value>,
}

/// Filter parameters for querying audit logs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditQuery {
    pub action: Option<String>,
    pub actor_user_id: Option<DbId>,
    pub target_type: Option<String>,
    pub target_id: Option<DbId>,
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Paginated response for audit log queries.
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogPage {
    pub items: Vec<AuditLog>,
    pub total: i64,
}
