//! Self-service handlers for the authenticated employee's own record.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use stafflink_core::error::CoreError;
use stafflink_db::models::employee::UpdateProfile;
use stafflink_db::repositories::{EmployeeRepo, RequestRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflow::refresh;

/// GET /api/v1/me
pub async fn get_my_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: auth.user_id,
        }))?;
    Ok(Json(DataResponse { data: employee }))
}

/// PUT /api/v1/me
///
/// Direct self-edit of the fields an employee owns outright. Edits touching
/// a badge field trigger the QR refresh fan-out to admins.
pub async fn update_my_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    let before = EmployeeRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: auth.user_id,
        }))?;

    if !before.is_active {
        return Err(AppError::Core(CoreError::InvalidState(
            "Inactive employees cannot edit their profile".into(),
        )));
    }

    let after = EmployeeRepo::update_profile(&state.pool, before.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: before.id,
        }))?;

    refresh::signal_profile_edit(&state.pool, auth.user_id, &before, &after).await;

    Ok(Json(DataResponse { data: after }))
}

/// GET /api/v1/me/requests
///
/// The caller's own modification requests, newest first.
pub async fn list_my_requests(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: auth.user_id,
        }))?;

    let requests = RequestRepo::list_for_employee(&state.pool, employee.id).await?;
    Ok(Json(DataResponse { data: requests }))
}
