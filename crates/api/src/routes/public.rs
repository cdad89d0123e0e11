//! Route definitions for the unauthenticated `/public` surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Routes mounted at `/public`. No authentication.
///
/// ```text
/// GET    /badge/{token}    -> get_public_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/badge/{token}", get(public::get_public_profile))
}
