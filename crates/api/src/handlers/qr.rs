//! Handlers for an employee's QR badge token. Admin only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use stafflink_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflow::qr;

/// POST /api/v1/employees/{id}/qr
///
/// Generate a fresh token, revoking whatever was active before.
pub async fn generate_qr(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let token = qr::generate_or_regenerate(&state.pool, employee_id, admin.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: token })))
}

/// DELETE /api/v1/employees/{id}/qr
///
/// Revoke the active token. Idempotent: 204 whether or not one existed.
pub async fn revoke_qr(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    qr::revoke(&state.pool, employee_id, admin.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/employees/{id}/qr
///
/// The employee's current token state, derived live from the table.
/// `data` is null when no token was ever issued.
pub async fn get_qr(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let token = qr::get_current(&state.pool, employee_id).await?;
    Ok(Json(DataResponse { data: token }))
}
