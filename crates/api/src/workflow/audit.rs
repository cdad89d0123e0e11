//! Best-effort audit recording.
//!
//! Every state transition in the workflow layer feeds the audit trail, but
//! an audit write failure must never fail the operation it describes: the
//! employee record and request rows are the system of record, the audit log
//! is a side channel.

use sqlx::PgPool;
use stafflink_core::audit::AuditAction;
use stafflink_core::types::DbId;
use stafflink_db::models::audit::CreateAuditLog;
use stafflink_db::repositories::AuditLogRepo;

/// Append an audit entry, swallowing (and logging) any failure.
pub async fn record(
    pool: &PgPool,
    action: AuditAction,
    actor_user_id: Option<DbId>,
    target_type: &str,
    target_id: Option<DbId>,
    details: serde_json::Value,
) {
    let entry = CreateAuditLog {
        action: action.as_str().to_string(),
        actor_user_id,
        target_type: target_type.to_string(),
        target_id,
        details: Some(details),
    };

    if let Err(err) = AuditLogRepo::insert(pool, &entry).await {
        tracing::warn!(
            action = %action,
            target_type = target_type,
            target_id = ?target_id,
            error = %err,
            "Audit write failed; primary operation unaffected"
        );
    }
}
