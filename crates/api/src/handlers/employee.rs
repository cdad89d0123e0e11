//! Handlers for the `/employees` resource (HR administration).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use stafflink_core::audit::{target_types, AuditAction};
use stafflink_core::error::CoreError;
use stafflink_core::types::DbId;
use stafflink_db::models::employee::{CreateEmployee, UpdateEmployee};
use stafflink_db::repositories::EmployeeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflow::{audit, qr};

/// GET /api/v1/employees
///
/// List all employees, active first.
pub async fn list_employees(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: employees }))
}

/// GET /api/v1/employees/{id}
pub async fn get_employee(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    Ok(Json(DataResponse { data: employee }))
}

/// POST /api/v1/employees
///
/// Create an employee record. Admin only.
pub async fn create_employee(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<impl IntoResponse> {
    if input.first_name.trim().is_empty()
        || input.last_name.trim().is_empty()
        || input.matricule.trim().is_empty()
    {
        return Err(AppError::Core(CoreError::Validation(
            "first_name, last_name, and matricule are required".into(),
        )));
    }

    let employee = EmployeeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = admin.user_id,
        employee_id = employee.id,
        matricule = %employee.matricule,
        "Employee created"
    );

    audit::record(
        &state.pool,
        AuditAction::EmployeeCreated,
        Some(admin.user_id),
        target_types::EMPLOYEE,
        Some(employee.id),
        json!({ "matricule": employee.matricule, "department": employee.department }),
    )
    .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: employee })))
}

/// PUT /api/v1/employees/{id}
///
/// Update HR-managed fields. Admin only.
pub async fn update_employee(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<impl IntoResponse> {
    let before = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    let employee = EmployeeRepo::update(&state.pool, id, &input).await?.ok_or(
        AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }),
    )?;

    audit::record(
        &state.pool,
        AuditAction::EmployeeUpdated,
        Some(admin.user_id),
        target_types::EMPLOYEE,
        Some(id),
        json!({
            "old": {
                "first_name": before.first_name,
                "last_name": before.last_name,
                "matricule": before.matricule,
                "department": before.department,
            },
            "new": {
                "first_name": employee.first_name,
                "last_name": employee.last_name,
                "matricule": employee.matricule,
                "department": employee.department,
            },
        }),
    )
    .await;

    Ok(Json(DataResponse { data: employee }))
}

/// POST /api/v1/employees/{id}/deactivate
///
/// Soft-deactivate an employee. Admin only. Revokes any live QR token as a
/// side effect so no public link survives the departure.
pub async fn deactivate_employee(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    let deactivated = EmployeeRepo::deactivate(&state.pool, id).await?;

    // Contract with the token lifecycle: departure kills the public link.
    // Runs even on a repeat deactivation, in case a revoke was missed.
    qr::revoke(&state.pool, id, admin.user_id).await?;

    if deactivated {
        tracing::info!(user_id = admin.user_id, employee_id = id, "Employee deactivated");
        audit::record(
            &state.pool,
            AuditAction::EmployeeDeactivated,
            Some(admin.user_id),
            target_types::EMPLOYEE,
            Some(id),
            json!({}),
        )
        .await;
    }

    Ok(StatusCode::NO_CONTENT)
}
