//! Handlers for per-field public visibility flags. Admin only.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use stafflink_core::audit::{target_types, AuditAction};
use stafflink_core::error::CoreError;
use stafflink_core::fields::VisibilityField;
use stafflink_core::types::DbId;
use stafflink_db::models::visibility::SetVisibility;
use stafflink_db::repositories::{EmployeeRepo, VisibilityRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflow::audit;

/// GET /api/v1/employees/{id}/visibility
///
/// Explicit flags only. Fields with no row are private by default, so an
/// empty list means a fully private profile.
pub async fn get_visibility(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_employee(&state, employee_id).await?;
    let flags = VisibilityRepo::list_for_employee(&state.pool, employee_id).await?;
    Ok(Json(DataResponse { data: flags }))
}

/// PUT /api/v1/employees/{id}/visibility
///
/// Upsert one flag.
pub async fn set_visibility(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
    Json(input): Json<SetVisibility>,
) -> AppResult<impl IntoResponse> {
    ensure_employee(&state, employee_id).await?;

    let field = VisibilityField::parse(&input.field_key)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let flag =
        VisibilityRepo::upsert(&state.pool, employee_id, field.as_str(), input.is_public).await?;

    audit::record(
        &state.pool,
        AuditAction::VisibilityUpdated,
        Some(admin.user_id),
        target_types::VISIBILITY,
        Some(employee_id),
        json!({ "field_key": field.as_str(), "is_public": input.is_public }),
    )
    .await;

    Ok(Json(DataResponse { data: flag }))
}

async fn ensure_employee(state: &AppState, employee_id: DbId) -> AppResult<()> {
    EmployeeRepo::find_by_id(&state.pool, employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: employee_id,
        }))?;
    Ok(())
}
