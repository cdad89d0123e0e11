//! Integration tests for the per-field visibility flag repository.

use sqlx::PgPool;
use stafflink_db::models::employee::CreateEmployee;
use stafflink_db::repositories::{EmployeeRepo, VisibilityRepo};

fn new_employee(matricule: &str) -> CreateEmployee {
    CreateEmployee {
        user_id: None,
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        matricule: matricule.to_string(),
        department: "Marketing".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: No rows means nothing public
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_defaults_to_private(pool: PgPool) {
    let employee = EmployeeRepo::create(&pool, &new_employee("EMP200"))
        .await
        .unwrap();

    assert!(VisibilityRepo::list_for_employee(&pool, employee.id)
        .await
        .unwrap()
        .is_empty());
    assert!(VisibilityRepo::public_keys(&pool, employee.id)
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Test: Upsert is idempotent and flips in place
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_flips_in_place(pool: PgPool) {
    let employee = EmployeeRepo::create(&pool, &new_employee("EMP200"))
        .await
        .unwrap();

    let flag = VisibilityRepo::upsert(&pool, employee.id, "email", true)
        .await
        .unwrap();
    assert!(flag.is_public);

    // Same key again: one row, new value.
    let flipped = VisibilityRepo::upsert(&pool, employee.id, "email", false)
        .await
        .unwrap();
    assert_eq!(flipped.id, flag.id);
    assert!(!flipped.is_public);

    let flags = VisibilityRepo::list_for_employee(&pool, employee.id)
        .await
        .unwrap();
    assert_eq!(flags.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: public_keys returns only is_public = true rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_keys_excludes_explicit_private(pool: PgPool) {
    let employee = EmployeeRepo::create(&pool, &new_employee("EMP200"))
        .await
        .unwrap();

    VisibilityRepo::upsert(&pool, employee.id, "first_name", true)
        .await
        .unwrap();
    VisibilityRepo::upsert(&pool, employee.id, "poste", true)
        .await
        .unwrap();
    VisibilityRepo::upsert(&pool, employee.id, "phone", false)
        .await
        .unwrap();

    let keys = VisibilityRepo::public_keys(&pool, employee.id).await.unwrap();
    assert_eq!(keys, vec!["first_name".to_string(), "poste".to_string()]);
}

// ---------------------------------------------------------------------------
// Test: Flags are scoped per employee
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_flags_scoped_per_employee(pool: PgPool) {
    let first = EmployeeRepo::create(&pool, &new_employee("EMP200"))
        .await
        .unwrap();
    let second = EmployeeRepo::create(&pool, &new_employee("EMP201"))
        .await
        .unwrap();

    VisibilityRepo::upsert(&pool, first.id, "email", true)
        .await
        .unwrap();

    assert!(VisibilityRepo::public_keys(&pool, second.id)
        .await
        .unwrap()
        .is_empty());
}
