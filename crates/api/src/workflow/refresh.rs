//! The QR-refresh signal: dedup-sensitive admin fan-out.
//!
//! When a direct (non-request) profile edit changes a field rendered on the
//! public badge, admins are told the token's cached rendering is stale. The
//! signal only flags staleness; it never regenerates the token itself.
//! Dedup key: (recipient, exact title, exact employee link) over unread rows,
//! so an admin's inbox holds at most one unread "QR refresh required" item
//! per employee no matter how many times the employee edits before they act.

use serde_json::json;
use sqlx::PgPool;
use stafflink_core::audit::{target_types, AuditAction};
use stafflink_core::fields::BADGE_FIELDS;
use stafflink_core::notify;
use stafflink_core::types::DbId;
use stafflink_db::models::employee::Employee;
use stafflink_db::models::notification::CreateNotification;
use stafflink_db::repositories::{NotificationRepo, UserRepo};

use super::audit;
use crate::error::AppResult;

/// Outcome of a refresh fan-out.
#[derive(Debug, Default, serde::Serialize)]
pub struct RefreshFanout {
    /// Admins who received a new unread notification.
    pub notified: u64,
    /// Admins skipped because an equivalent unread item already existed.
    pub deduped: u64,
}

/// Badge-visible fields whose value differs between two employee snapshots.
pub fn changed_badge_fields(before: &Employee, after: &Employee) -> Vec<&'static str> {
    let mut changed = Vec::new();
    for &key in BADGE_FIELDS {
        let differs = match key {
            "poste" => before.poste != after.poste,
            "email" => before.email != after.email,
            "phone" => before.phone != after.phone,
            "photo_url" => before.photo_url != after.photo_url,
            _ => false,
        };
        if differs {
            changed.push(key);
        }
    }
    changed
}

/// Fan a "QR refresh required" notification out to every active admin,
/// skipping any admin who already has an equivalent unread item.
pub async fn notify_qr_refresh_required(
    pool: &PgPool,
    employee_id: DbId,
    changed_fields: &[&str],
) -> AppResult<RefreshFanout> {
    let admins = UserRepo::list_active_admins(pool).await?;
    let link = notify::qr_refresh_link(employee_id);
    let body = notify::qr_refresh_body(changed_fields);

    let mut fanout = RefreshFanout::default();
    for admin in &admins {
        let already =
            NotificationRepo::exists_unread(pool, admin.id, notify::QR_REFRESH_TITLE, &link)
                .await?;
        if already {
            fanout.deduped += 1;
            continue;
        }

        let create = CreateNotification {
            recipient_user_id: admin.id,
            title: notify::QR_REFRESH_TITLE.to_string(),
            body: body.clone(),
            link: Some(link.clone()),
        };
        NotificationRepo::create(pool, &create).await?;
        fanout.notified += 1;
    }

    tracing::info!(
        employee_id,
        notified = fanout.notified,
        deduped = fanout.deduped,
        changed_fields = ?changed_fields,
        "QR refresh signal fanned out"
    );

    Ok(fanout)
}

/// Consume an admin's unread "QR refresh required" items for one employee.
///
/// Called when the admin actually regenerates the token; once the prior item
/// is read, the next badge-visible edit produces a fresh unread one.
pub async fn mark_qr_refresh_consumed(
    pool: &PgPool,
    employee_id: DbId,
    admin_id: DbId,
) -> AppResult<u64> {
    let link = notify::qr_refresh_link(employee_id);
    let count =
        NotificationRepo::mark_matching_read(pool, admin_id, notify::QR_REFRESH_TITLE, &link)
            .await?;
    Ok(count)
}

/// Fire the refresh signal after a direct self-profile edit.
///
/// Secondary effect from the edit's point of view: the audit entry and the
/// fan-out are each best-effort, so a failure here never surfaces into the
/// profile update's result.
pub async fn signal_profile_edit(
    pool: &PgPool,
    actor_user_id: DbId,
    before: &Employee,
    after: &Employee,
) {
    let changed = changed_badge_fields(before, after);

    audit::record(
        pool,
        AuditAction::ProfileSelfUpdated,
        Some(actor_user_id),
        target_types::EMPLOYEE,
        Some(after.id),
        json!({
            "changed_badge_fields": changed,
            "old": {
                "poste": before.poste,
                "email": before.email,
                "phone": before.phone,
                "photo_url": before.photo_url,
            },
            "new": {
                "poste": after.poste,
                "email": after.email,
                "phone": after.phone,
                "photo_url": after.photo_url,
            },
        }),
    )
    .await;

    if changed.is_empty() {
        return;
    }

    if let Err(err) = notify_qr_refresh_required(pool, after.id, &changed).await {
        tracing::warn!(
            employee_id = after.id,
            error = %err,
            "QR refresh fan-out failed; profile update stands"
        );
    }
}
