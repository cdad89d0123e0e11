//! HTTP-level integration tests for the QR refresh signal.
//!
//! A direct self-edit of a badge-visible field fans "QR refresh required"
//! out to every active admin, deduplicated per (admin, employee) over unread
//! rows. Regenerating the token consumes the acting admin's unread item,
//! re-arming the signal for the next edit.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_employee, create_user, get_auth, post_auth, put_json_auth,
    token_for,
};
use sqlx::PgPool;
use stafflink_core::notify;
use stafflink_db::repositories::NotificationRepo;

// ---------------------------------------------------------------------------
// Test: Badge-field edit notifies every active admin
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_badge_edit_notifies_admins(pool: PgPool) {
    let first_admin = create_user(&pool, "admin_one", "admin").await;
    let second_admin = create_user(&pool, "admin_two", "admin").await;
    let user = create_user(&pool, "marie", "employee").await;
    let employee = create_employee(&pool, Some(user.id), "EMP600").await;

    let body = serde_json::json!({ "poste": "Engineering Manager" });
    let app = build_test_app(pool.clone());
    let response = put_json_auth(app, "/api/v1/me", body, &token_for(&user)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let link = notify::qr_refresh_link(employee.id);
    for admin in [&first_admin, &second_admin] {
        assert!(
            NotificationRepo::exists_unread(&pool, admin.id, notify::QR_REFRESH_TITLE, &link)
                .await
                .unwrap(),
            "every active admin gets the staleness signal"
        );
    }
    // The employee themselves is not notified.
    assert_eq!(NotificationRepo::unread_count(&pool, user.id).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Test: Non-badge edits do not fan out
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_badge_edit_silent(pool: PgPool) {
    let admin = create_user(&pool, "rh_admin", "admin").await;
    let user = create_user(&pool, "marie", "employee").await;
    create_employee(&pool, Some(user.id), "EMP600").await;

    // A no-op body changes nothing.
    let app = build_test_app(pool.clone());
    let response = put_json_auth(app, "/api/v1/me", serde_json::json!({}), &token_for(&user)).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        NotificationRepo::unread_count(&pool, admin.id).await.unwrap(),
        0
    );
}

// ---------------------------------------------------------------------------
// Test: Repeat edits collapse into one unread item per admin
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeat_edits_deduped(pool: PgPool) {
    let admin = create_user(&pool, "rh_admin", "admin").await;
    let user = create_user(&pool, "marie", "employee").await;
    create_employee(&pool, Some(user.id), "EMP600").await;
    let token = token_for(&user);

    let app = build_test_app(pool.clone());
    put_json_auth(
        app,
        "/api/v1/me",
        serde_json::json!({ "poste": "Manager" }),
        &token,
    )
    .await;
    let app = build_test_app(pool.clone());
    put_json_auth(
        app,
        "/api/v1/me",
        serde_json::json!({ "email": "marie@corp.example" }),
        &token,
    )
    .await;
    let app = build_test_app(pool.clone());
    put_json_auth(
        app,
        "/api/v1/me",
        serde_json::json!({ "phone": "+33 6 12 34 56 78" }),
        &token,
    )
    .await;

    assert_eq!(
        NotificationRepo::unread_count(&pool, admin.id).await.unwrap(),
        1,
        "successive edits before the admin acts collapse into one item"
    );
}

// ---------------------------------------------------------------------------
// Test: Dedup is per employee, not global
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dedup_scoped_per_employee(pool: PgPool) {
    let admin = create_user(&pool, "rh_admin", "admin").await;
    let first_user = create_user(&pool, "marie", "employee").await;
    let second_user = create_user(&pool, "jean", "employee").await;
    create_employee(&pool, Some(first_user.id), "EMP600").await;
    create_employee(&pool, Some(second_user.id), "EMP601").await;

    let app = build_test_app(pool.clone());
    put_json_auth(
        app,
        "/api/v1/me",
        serde_json::json!({ "poste": "Manager" }),
        &token_for(&first_user),
    )
    .await;
    let app = build_test_app(pool.clone());
    put_json_auth(
        app,
        "/api/v1/me",
        serde_json::json!({ "poste": "Director" }),
        &token_for(&second_user),
    )
    .await;

    assert_eq!(
        NotificationRepo::unread_count(&pool, admin.id).await.unwrap(),
        2,
        "different employees are different dedup keys"
    );
}

// ---------------------------------------------------------------------------
// Test: Regeneration consumes the signal and re-arms it
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_regenerate_consumes_and_rearms(pool: PgPool) {
    let admin = create_user(&pool, "rh_admin", "admin").await;
    let user = create_user(&pool, "marie", "employee").await;
    let employee = create_employee(&pool, Some(user.id), "EMP600").await;
    let link = notify::qr_refresh_link(employee.id);

    // Edit -> signal raised.
    let app = build_test_app(pool.clone());
    put_json_auth(
        app,
        "/api/v1/me",
        serde_json::json!({ "poste": "Manager" }),
        &token_for(&user),
    )
    .await;
    assert!(
        NotificationRepo::exists_unread(&pool, admin.id, notify::QR_REFRESH_TITLE, &link)
            .await
            .unwrap()
    );

    // Admin regenerates: their unread item is consumed.
    let app = build_test_app(pool.clone());
    let response = post_auth(
        app,
        &format!("/api/v1/employees/{}/qr", employee.id),
        &token_for(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(
        !NotificationRepo::exists_unread(&pool, admin.id, notify::QR_REFRESH_TITLE, &link)
            .await
            .unwrap(),
        "acting on the signal consumes it"
    );

    // The next badge-visible edit produces a fresh unread item.
    let app = build_test_app(pool.clone());
    put_json_auth(
        app,
        "/api/v1/me",
        serde_json::json!({ "poste": "Senior Manager" }),
        &token_for(&user),
    )
    .await;
    assert!(
        NotificationRepo::exists_unread(&pool, admin.id, notify::QR_REFRESH_TITLE, &link)
            .await
            .unwrap(),
        "a consumed signal re-arms"
    );
}

// ---------------------------------------------------------------------------
// Test: A deactivated employee cannot edit their profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inactive_employee_cannot_edit(pool: PgPool) {
    let admin = create_user(&pool, "rh_admin", "admin").await;
    let user = create_user(&pool, "marie", "employee").await;
    let employee = create_employee(&pool, Some(user.id), "EMP600").await;

    let app = build_test_app(pool.clone());
    post_auth(
        app,
        &format!("/api/v1/employees/{}/deactivate", employee.id),
        &token_for(&admin),
    )
    .await;

    let app = build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/me",
        serde_json::json!({ "poste": "Ghost" }),
        &token_for(&user),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Test: Own profile read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_my_profile(pool: PgPool) {
    let user = create_user(&pool, "marie", "employee").await;
    create_employee(&pool, Some(user.id), "EMP600").await;

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/me", &token_for(&user)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["matricule"], "EMP600");
}

// ---------------------------------------------------------------------------
// Test: Self-edit audit entry carries old/new value snapshots
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_self_edit_audit_records_value_snapshots(pool: PgPool) {
    let admin = create_user(&pool, "rh_admin", "admin").await;
    let user = create_user(&pool, "marie", "employee").await;
    create_employee(&pool, Some(user.id), "EMP600").await;
    let token = token_for(&user);

    let app = build_test_app(pool.clone());
    put_json_auth(app, "/api/v1/me", serde_json::json!({ "poste": "Engineer" }), &token).await;
    let app = build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/me",
        serde_json::json!({ "poste": "Senior Engineer" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/audit?action=PROFILE_SELF_UPDATED",
        &token_for(&admin),
    )
    .await;
    let json = body_json(response).await;
    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    // Each entry must hold enough to reconstruct that exact edit, including
    // the pre-edit value, so a later approval conflict can be untangled.
    let second_edit = items
        .iter()
        .find(|entry| entry["details"]["new"]["poste"] == "Senior Engineer")
        .expect("entry for the second edit");
    assert_eq!(second_edit["details"]["old"]["poste"], "Engineer");
    assert_eq!(
        second_edit["details"]["changed_badge_fields"],
        serde_json::json!(["poste"])
    );

    let first_edit = items
        .iter()
        .find(|entry| entry["details"]["new"]["poste"] == "Engineer")
        .expect("entry for the first edit");
    assert!(first_edit["details"]["old"]["poste"].is_null());
}
