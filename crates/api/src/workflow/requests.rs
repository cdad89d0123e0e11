//! The modification-request workflow: submit and decide.
//!
//! A request is a one-shot terminal state machine (pending -> approved or
//! rejected, never reversible). The terminal transition is enforced with a
//! conditional update rather than a lock, so two racing decisions cannot
//! both win.

use serde_json::json;
use sqlx::PgPool;
use stafflink_core::audit::{target_types, AuditAction};
use stafflink_core::error::CoreError;
use stafflink_core::fields::RequestField;
use stafflink_core::notify;
use stafflink_core::status::{Decision, RequestStatus};
use stafflink_core::types::DbId;
use stafflink_db::models::notification::CreateNotification;
use stafflink_db::models::request::{CreateModificationRequest, ModificationRequest};
use stafflink_db::repositories::{EmployeeRepo, NotificationRepo, RequestRepo};

use super::audit;
use crate::error::{AppError, AppResult};

/// Submit a proposed field change, stored pending.
///
/// Validates the target field against the closed enumerated set and rejects
/// values that are empty after trimming or equal to the live current value.
/// The previous value is snapshotted here, at submission time -- the reviewer
/// will see what the requester saw even if the field drifts before the
/// decision. No notification fires: admins discover pending work via the
/// pending-count read.
pub async fn submit(
    pool: &PgPool,
    employee_id: DbId,
    requester_id: DbId,
    target_field: &str,
    requested_value: &str,
    note: Option<String>,
) -> AppResult<ModificationRequest> {
    let field = RequestField::parse(target_field)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let requested_value = requested_value.trim();
    if requested_value.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Requested value must not be empty".into(),
        )));
    }

    let employee = EmployeeRepo::find_by_id(pool, employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: employee_id,
        }))?;

    let previous_value = employee.field_value(field).map(str::to_string);
    if previous_value.as_deref() == Some(requested_value) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Requested value for '{field}' matches the current value"
        ))));
    }

    let create = CreateModificationRequest {
        employee_id,
        requester_id,
        target_field: field.as_str().to_string(),
        previous_value: previous_value.clone(),
        requested_value: requested_value.to_string(),
        note,
    };
    let request = RequestRepo::create(pool, &create).await?;

    tracing::info!(
        request_id = request.id,
        employee_id,
        requester_id,
        target_field = %field,
        "Modification request submitted"
    );

    audit::record(
        pool,
        AuditAction::RequestSubmitted,
        Some(requester_id),
        target_types::REQUEST,
        Some(request.id),
        json!({
            "employee_id": employee_id,
            "target_field": field.as_str(),
            "previous_value": previous_value,
            "requested_value": requested_value,
        }),
    )
    .await;

    Ok(request)
}

/// Decide a pending request.
///
/// On approval the requested value is written into the employee field
/// verbatim, regardless of how the live value may have drifted since
/// submission; the audit entry records both the submission snapshot and the
/// decision-time live value so a human can reconcile a conflict afterwards.
/// The requester is notified best-effort; a notification or audit failure
/// never rolls back the decision.
pub async fn decide(
    pool: &PgPool,
    request_id: DbId,
    reviewer_id: DbId,
    outcome: Decision,
    comment: Option<String>,
) -> AppResult<ModificationRequest> {
    let request = RequestRepo::find_by_id(pool, request_id).await?.ok_or(
        AppError::Core(CoreError::NotFound {
            entity: "ModificationRequest",
            id: request_id,
        }),
    )?;

    let status = RequestStatus::parse(&request.status)
        .map_err(|msg| AppError::Core(CoreError::Internal(msg)))?;
    if status.is_terminal() {
        return Err(AppError::Core(CoreError::InvalidState(
            "Request already processed".into(),
        )));
    }

    // Conditional flip: of two racing decisions, exactly one matches the
    // pending row. The loser lands here with None.
    let decided = RequestRepo::decide(
        pool,
        request_id,
        outcome.resolved_status(),
        reviewer_id,
        comment.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::InvalidState(
        "Request already processed".into(),
    )))?;

    let field = RequestField::parse(&decided.target_field)
        .map_err(|msg| AppError::Core(CoreError::Internal(msg)))?;

    let mut live_value_at_decision: Option<String> = None;
    if outcome == Decision::Approve {
        let employee = EmployeeRepo::find_by_id(pool, decided.employee_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Employee",
                id: decided.employee_id,
            }))?;
        live_value_at_decision = employee.field_value(field).map(str::to_string);

        // Primary effect: the field write. Failures propagate.
        EmployeeRepo::apply_field(pool, decided.employee_id, field, &decided.requested_value)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Employee",
                id: decided.employee_id,
            }))?;
    }

    tracing::info!(
        request_id,
        reviewer_id,
        employee_id = decided.employee_id,
        target_field = %field,
        outcome = outcome.resolved_status().as_str(),
        "Modification request decided"
    );

    notify_requester(pool, &decided, outcome, field).await;

    let action = match outcome {
        Decision::Approve => AuditAction::RequestApproved,
        Decision::Reject => AuditAction::RequestRejected,
    };
    audit::record(
        pool,
        action,
        Some(reviewer_id),
        target_types::REQUEST,
        Some(request_id),
        json!({
            "employee_id": decided.employee_id,
            "target_field": field.as_str(),
            "previous_value": decided.previous_value,
            "live_value_at_decision": live_value_at_decision,
            "requested_value": decided.requested_value,
            "comment": decided.decision_comment,
        }),
    )
    .await;

    Ok(decided)
}

/// Resolve the requester's linked account and enqueue the decision
/// notification. Best-effort: each request decision is a unique event, so
/// the plain insert primitive is used, and any failure is logged, never
/// surfaced.
async fn notify_requester(
    pool: &PgPool,
    request: &ModificationRequest,
    outcome: Decision,
    field: RequestField,
) {
    let (title, body) = match outcome {
        Decision::Approve => (
            notify::REQUEST_APPROVED_TITLE,
            notify::request_approved_body(field.as_str(), request.decision_comment.as_deref()),
        ),
        Decision::Reject => (
            notify::REQUEST_REJECTED_TITLE,
            notify::request_rejected_body(field.as_str(), request.decision_comment.as_deref()),
        ),
    };

    let create = CreateNotification {
        recipient_user_id: request.requester_id,
        title: title.to_string(),
        body,
        link: Some(notify::request_link(request.id)),
    };

    if let Err(err) = NotificationRepo::create(pool, &create).await {
        tracing::warn!(
            request_id = request.id,
            recipient = request.requester_id,
            error = %err,
            "Decision notification failed; decision stands"
        );
    }
}
