pub mod audit;
pub mod employee;
pub mod health;
pub mod me;
pub mod notification;
pub mod public;
pub mod request;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /employees                               list, create (admin)
/// /employees/{id}                          get, update
/// /employees/{id}/deactivate               deactivate (POST)
/// /employees/{id}/qr                       generate, revoke, current (POST, DELETE, GET)
/// /employees/{id}/visibility               flags (GET, PUT)
///
/// /me                                      own profile (GET, PUT)
/// /me/requests                             own requests (GET), submit (POST)
///
/// /requests/pending                        review queue (admin)
/// /requests/pending/count                  queue size (admin)
/// /requests/{id}                           get (admin)
/// /requests/{id}/decide                    approve or reject (POST, admin)
///
/// /notifications                           list (?unread_only, limit, offset)
/// /notifications/read-all                  mark all read (POST)
/// /notifications/unread-count              unread count (GET)
/// /notifications/{id}/read                 mark read (POST)
///
/// /audit                                   audit trail (GET, admin)
///
/// /public/badge/{token}                    QR landing page data (no auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/employees", employee::router())
        .nest("/me", me::router())
        .nest("/requests", request::router())
        .nest("/notifications", notification::router())
        .nest("/audit", audit::router())
        .nest("/public", public::router())
}
