//! Route definitions for the `/audit` trail. Admin only.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Routes mounted at `/audit`.
///
/// ```text
/// GET    /    -> list_audit_logs (?action, ?actor_user_id, ?target_type,
///                ?target_id, ?from, ?to, ?limit, ?offset)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(audit::list_audit_logs))
}
