//! HTTP-level integration tests for the `/notifications` inbox endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_user, get_auth, post_auth, token_for};
use sqlx::PgPool;
use stafflink_core::notify;
use stafflink_db::models::notification::CreateNotification;
use stafflink_db::repositories::NotificationRepo;

async fn seed_notification(pool: &PgPool, recipient: i64, employee_id: i64) -> i64 {
    NotificationRepo::create(
        pool,
        &CreateNotification {
            recipient_user_id: recipient,
            title: notify::QR_REFRESH_TITLE.to_string(),
            body: notify::qr_refresh_body(&["poste"]),
            link: Some(notify::qr_refresh_link(employee_id)),
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Test: List and unread filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_notifications(pool: PgPool) {
    let user = create_user(&pool, "rh_admin", "admin").await;
    let token = token_for(&user);
    seed_notification(&pool, user.id, 1).await;
    seed_notification(&pool, user.id, 2).await;

    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/notifications", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/notifications?unread_only=true&limit=1", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Unread count and read-all
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unread_count_and_read_all(pool: PgPool) {
    let user = create_user(&pool, "rh_admin", "admin").await;
    let token = token_for(&user);
    seed_notification(&pool, user.id, 1).await;
    seed_notification(&pool, user.id, 2).await;

    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/notifications/unread-count", &token).await;
    assert_eq!(body_json(response).await["data"]["count"], 2);

    let app = build_test_app(pool.clone());
    let response = post_auth(app, "/api/v1/notifications/read-all", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["updated"], 2);

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/notifications/unread-count", &token).await;
    assert_eq!(body_json(response).await["data"]["count"], 0);
}

// ---------------------------------------------------------------------------
// Test: Mark-read is owner scoped at the HTTP layer
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_ownership(pool: PgPool) {
    let owner = create_user(&pool, "owner", "employee").await;
    let intruder = create_user(&pool, "intruder", "employee").await;
    let id = seed_notification(&pool, owner.id, 1).await;

    let app = build_test_app(pool.clone());
    let response = post_auth(
        app,
        &format!("/api/v1/notifications/{id}/read"),
        &token_for(&intruder),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = build_test_app(pool);
    let response = post_auth(
        app,
        &format!("/api/v1/notifications/{id}/read"),
        &token_for(&owner),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["is_read"], true);
}
