//! Route definitions for the `/requests` review surface. Admin only.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::request;
use crate::state::AppState;

/// Routes mounted at `/requests`.
///
/// ```text
/// GET    /pending          -> list_pending
/// GET    /pending/count    -> pending_count
/// GET    /{id}             -> get_request
/// POST   /{id}/decide      -> decide_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pending", get(request::list_pending))
        .route("/pending/count", get(request::pending_count))
        .route("/{id}", get(request::get_request))
        .route("/{id}/decide", post(request::decide_request))
}
