//! Route definitions for the `/employees` resource.
//!
//! Listing and reading require authentication; everything that writes is
//! admin only (enforced by the handlers' `RequireAdmin` extractor).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{employee, qr, visibility};
use crate::state::AppState;

/// Routes mounted at `/employees`.
///
/// ```text
/// GET    /                    -> list_employees
/// POST   /                    -> create_employee
/// GET    /{id}                -> get_employee
/// PUT    /{id}                -> update_employee
/// POST   /{id}/deactivate     -> deactivate_employee
///
/// POST   /{id}/qr             -> generate_qr
/// DELETE /{id}/qr             -> revoke_qr
/// GET    /{id}/qr             -> get_qr
///
/// GET    /{id}/visibility     -> get_visibility
/// PUT    /{id}/visibility     -> set_visibility
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employee::list_employees).post(employee::create_employee),
        )
        .route(
            "/{id}",
            get(employee::get_employee).put(employee::update_employee),
        )
        .route("/{id}/deactivate", post(employee::deactivate_employee))
        // QR badge lifecycle
        .route(
            "/{id}/qr",
            post(qr::generate_qr).delete(qr::revoke_qr).get(qr::get_qr),
        )
        // Public visibility flags
        .route(
            "/{id}/visibility",
            get(visibility::get_visibility).put(visibility::set_visibility),
        )
}
