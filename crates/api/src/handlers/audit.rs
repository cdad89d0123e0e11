//! Handlers for browsing the audit trail. Admin only.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use stafflink_db::models::audit::AuditQuery;
use stafflink_db::repositories::AuditLogRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/audit
///
/// Filterable, paginated view over `audit_logs`, newest first.
pub async fn list_audit_logs(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<AuditQuery>,
) -> AppResult<impl IntoResponse> {
    let page = AuditLogRepo::query(&state.pool, &query).await?;
    Ok(Json(DataResponse { data: page }))
}
