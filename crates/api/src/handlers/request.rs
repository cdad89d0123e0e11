//! Handlers for field-change modification requests.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use stafflink_core::error::CoreError;
use stafflink_core::types::DbId;
use stafflink_db::models::request::{DecideRequest, SubmitRequest};
use stafflink_db::repositories::{EmployeeRepo, RequestRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflow::requests;

/// POST /api/v1/me/requests
///
/// Submit a change request for a guarded field on the caller's own record.
pub async fn submit_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitRequest>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: auth.user_id,
        }))?;

    if !employee.is_active {
        return Err(AppError::Core(CoreError::InvalidState(
            "Inactive employees cannot submit requests".into(),
        )));
    }

    let request = requests::submit(
        &state.pool,
        employee.id,
        auth.user_id,
        &input.target_field,
        &input.requested_value,
        input.note.clone(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// GET /api/v1/requests/pending
///
/// Review queue, oldest first. Admin only.
pub async fn list_pending(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let requests = RequestRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/v1/requests/pending/count
pub async fn pending_count(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let count = RequestRepo::pending_count(&state.pool).await?;
    Ok(Json(DataResponse { data: json!({ "count": count }) }))
}

/// GET /api/v1/requests/{id}
pub async fn get_request(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ModificationRequest",
            id,
        }))?;
    Ok(Json(DataResponse { data: request }))
}

/// POST /api/v1/requests/{id}/decide
///
/// Approve or reject a pending request. Admin only. One-shot: a request
/// already decided comes back 409.
pub async fn decide_request(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DecideRequest>,
) -> AppResult<impl IntoResponse> {
    let request = requests::decide(
        &state.pool,
        id,
        admin.user_id,
        input.outcome,
        input.comment.clone(),
    )
    .await?;

    Ok(Json(DataResponse { data: request }))
}
