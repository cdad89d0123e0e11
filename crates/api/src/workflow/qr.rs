//! QR token lifecycle: generate/regenerate, revoke, current, public render.
//!
//! The single-active-token invariant is kept by sequencing (revoke any
//! active row, then insert the fresh one) with every step re-deriving
//! "current active" from the store. A brief window with zero active tokens
//! is acceptable; a window with two is not.

use serde_json::json;
use sqlx::PgPool;
use stafflink_core::audit::{target_types, AuditAction};
use stafflink_core::error::CoreError;
use stafflink_core::fields::VisibilityField;
use stafflink_core::qr::generate_token_value;
use stafflink_core::types::DbId;
use stafflink_db::models::employee::Employee;
use stafflink_db::models::token::QrToken;
use stafflink_db::repositories::{EmployeeRepo, TokenRepo, VisibilityRepo};

use super::audit;
use crate::error::{AppError, AppResult};

/// Issue a fresh token for an employee, superseding any active one.
///
/// Fails with `InvalidState` for a deactivated employee: no public link may
/// survive a departure. Regeneration also closes the refresh loop for the
/// acting admin by consuming their unread "QR refresh required" items.
pub async fn generate_or_regenerate(
    pool: &PgPool,
    employee_id: DbId,
    admin_id: DbId,
) -> AppResult<QrToken> {
    let employee = ensure_employee(pool, employee_id).await?;
    if !employee.is_active {
        return Err(AppError::Core(CoreError::InvalidState(
            "Cannot issue a public link for a deactivated employee".into(),
        )));
    }

    // Step 1: revoke whatever is active. Affects 0 or 1 rows under a healthy
    // invariant; more means the invariant was broken upstream, which the
    // bulk update repairs.
    let revoked = TokenRepo::revoke_active(pool, employee_id).await?;
    if revoked.len() > 1 {
        tracing::warn!(
            employee_id,
            revoked = revoked.len(),
            "More than one active token found during regenerate; invariant repaired"
        );
    }

    // Step 2: insert the replacement.
    let token =
        TokenRepo::insert_active(pool, employee_id, &generate_token_value(), None).await?;

    tracing::info!(
        employee_id,
        admin_id,
        token_id = token.id,
        superseded = revoked.len(),
        "QR token generated"
    );

    // The admin acted on the staleness signal; mark their unread refresh
    // notifications for this employee consumed. Best-effort.
    match super::refresh::mark_qr_refresh_consumed(pool, employee_id, admin_id).await {
        Ok(consumed) if consumed > 0 => {
            tracing::debug!(employee_id, admin_id, consumed, "QR refresh notifications consumed");
        }
        Ok(_) => {}
        Err(err) => {
            tracing::warn!(
                employee_id,
                admin_id,
                error = %err,
                "Failed to consume QR refresh notifications; token stands"
            );
        }
    }

    audit::record(
        pool,
        AuditAction::QrGenerated,
        Some(admin_id),
        target_types::TOKEN,
        Some(token.id),
        json!({
            "employee_id": employee_id,
            "superseded_token_ids": revoked.iter().map(|t| t.id).collect::<Vec<_>>(),
        }),
    )
    .await;

    Ok(token)
}

/// Revoke the employee's active token, if any.
///
/// Returns the affected row, or `None` when nothing was active (an
/// idempotent no-op, not an error).
pub async fn revoke(
    pool: &PgPool,
    employee_id: DbId,
    admin_id: DbId,
) -> AppResult<Option<QrToken>> {
    ensure_employee(pool, employee_id).await?;

    let mut revoked = TokenRepo::revoke_active(pool, employee_id).await?;
    if revoked.len() > 1 {
        tracing::warn!(
            employee_id,
            revoked = revoked.len(),
            "More than one active token found during revoke; invariant repaired"
        );
    }

    let Some(token) = revoked.pop() else {
        return Ok(None);
    };

    tracing::info!(employee_id, admin_id, token_id = token.id, "QR token revoked");

    audit::record(
        pool,
        AuditAction::QrRevoked,
        Some(admin_id),
        target_types::TOKEN,
        Some(token.id),
        json!({ "employee_id": employee_id }),
    )
    .await;

    Ok(Some(token))
}

/// The employee's current token.
///
/// Prefers the most recent active row; falls back to the most recent row of
/// any status so the caller can show "last known" state; `None` only if the
/// employee never had a token. More than one active row is a broken
/// uniqueness invariant and is surfaced, never silently first-row.
pub async fn get_current(pool: &PgPool, employee_id: DbId) -> AppResult<Option<QrToken>> {
    let mut active = TokenRepo::list_active(pool, employee_id).await?;
    if active.len() > 1 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Employee {employee_id} has {} active QR tokens; expected at most one",
            active.len()
        ))));
    }
    if let Some(token) = active.pop() {
        return Ok(Some(token));
    }
    Ok(TokenRepo::find_latest(pool, employee_id).await?)
}

/// The public rendering of a badge link: field values gated per-field.
#[derive(Debug, serde::Serialize)]
pub struct PublicProfile {
    /// Only fields with an explicit `is_public = true` flag appear here;
    /// everything else is omitted (fail-closed).
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Resolve a bearer token value into the public profile it exposes.
///
/// Returns `None` for unknown, revoked, or time-expired tokens, and for
/// tokens whose employee has since been deactivated. The visibility gate is
/// consulted here, at render time -- not at issuance time -- so a toggle
/// takes effect on the next fetch without touching the token.
pub async fn resolve_public_profile(
    pool: &PgPool,
    token_value: &str,
) -> AppResult<Option<PublicProfile>> {
    let Some(token) = TokenRepo::find_live_by_value(pool, token_value).await? else {
        return Ok(None);
    };

    let Some(employee) = EmployeeRepo::find_by_id(pool, token.employee_id).await? else {
        return Ok(None);
    };
    if !employee.is_active {
        return Ok(None);
    }

    let public_keys = VisibilityRepo::public_keys(pool, employee.id).await?;

    let mut fields = serde_json::Map::new();
    for key in &public_keys {
        // Unknown keys in storage are skipped rather than rendered.
        let Ok(field) = VisibilityField::parse(key) else {
            tracing::warn!(employee_id = employee.id, field_key = %key, "Skipping unknown visibility key");
            continue;
        };
        if let Some(value) = visibility_value(&employee, field) {
            fields.insert(key.clone(), serde_json::Value::String(value.to_string()));
        }
    }

    Ok(Some(PublicProfile { fields }))
}

/// Current value of a gated field, `None` when unset.
fn visibility_value(employee: &Employee, field: VisibilityField) -> Option<&str> {
    match field {
        VisibilityField::FirstName => Some(employee.first_name.as_str()),
        VisibilityField::LastName => Some(employee.last_name.as_str()),
        VisibilityField::Matricule => Some(employee.matricule.as_str()),
        VisibilityField::Department => Some(employee.department.as_str()),
        VisibilityField::Poste => employee.poste.as_deref(),
        VisibilityField::Email => employee.email.as_deref(),
        VisibilityField::Phone => employee.phone.as_deref(),
        VisibilityField::PhotoUrl => employee.photo_url.as_deref(),
    }
}

async fn ensure_employee(pool: &PgPool, employee_id: DbId) -> AppResult<Employee> {
    EmployeeRepo::find_by_id(pool, employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: employee_id,
        }))
}
