//! The unauthenticated QR landing endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflow::qr;

/// GET /api/v1/public/badge/{token}
///
/// Resolve a scanned token to the visible subset of the profile. Unknown,
/// revoked, and expired tokens all produce the same 404 so a response never
/// confirms that a token once existed.
pub async fn get_public_profile(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<impl IntoResponse> {
    match qr::resolve_public_profile(&state.pool, &token).await? {
        Some(profile) => Ok(Json(DataResponse { data: profile }).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Badge not found", "code": "NOT_FOUND" })),
        )
            .into_response()),
    }
}
