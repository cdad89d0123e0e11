//! Route definitions for the self-service `/me` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{profile, request};
use crate::state::AppState;

/// Routes mounted at `/me`.
///
/// ```text
/// GET    /            -> get_my_profile
/// PUT    /            -> update_my_profile
/// GET    /requests    -> list_my_requests
/// POST   /requests    -> submit_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(profile::get_my_profile).put(profile::update_my_profile),
        )
        .route(
            "/requests",
            get(profile::list_my_requests).post(request::submit_request),
        )
}
