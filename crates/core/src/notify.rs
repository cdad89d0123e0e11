//! Notification title/link templates and message builders.
//!
//! The QR-refresh dedup check matches on the exact title and link strings, so
//! every producer and the dedup query build them from this single module.

use crate::types::DbId;

/// Fixed title of the admin-facing "badge rendering is stale" notification.
/// Part of the dedup key; must never vary per occurrence.
pub const QR_REFRESH_TITLE: &str = "QR refresh required";

/// Title of the employee-facing approval notification.
pub const REQUEST_APPROVED_TITLE: &str = "Modification request approved";

/// Title of the employee-facing rejection notification.
pub const REQUEST_REJECTED_TITLE: &str = "Modification request rejected";

/// Admin link to an employee's QR management page. Part of the dedup key.
pub fn qr_refresh_link(employee_id: DbId) -> String {
    format!("/admin/employees/{employee_id}/qr")
}

/// Employee link to their own request history.
pub fn request_link(request_id: DbId) -> String {
    format!("/me/requests/{request_id}")
}

/// Body of the "QR refresh required" notification.
///
/// The body names the changed fields for the admin's benefit but is not part
/// of the dedup key, so successive edits touching different fields still
/// collapse into one unread item.
pub fn qr_refresh_body(changed_fields: &[&str]) -> String {
    format!(
        "Badge-visible profile fields changed ({}). The public QR badge \
         rendering is stale; regenerate the token to refresh it.",
        changed_fields.join(", ")
    )
}

/// Body of the approval notification sent to the requesting employee.
pub fn request_approved_body(field: &str, comment: Option<&str>) -> String {
    match comment {
        Some(c) if !c.trim().is_empty() => {
            format!("Your request to change '{field}' was approved: {c}")
        }
        _ => format!("Your request to change '{field}' was approved."),
    }
}

/// Body of the rejection notification sent to the requesting employee.
pub fn request_rejected_body(field: &str, comment: Option<&str>) -> String {
    match comment {
        Some(c) if !c.trim().is_empty() => {
            format!("Your request to change '{field}' was rejected: {c}")
        }
        _ => format!("Your request to change '{field}' was rejected."),
    }
}
