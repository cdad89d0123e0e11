//! Integration tests for the employee repository.
//!
//! - create / find / list
//! - partial updates over HR-managed vs self-managed field sets
//! - unique constraint on matricule
//! - soft deactivation

use sqlx::PgPool;
use stafflink_db::models::employee::{CreateEmployee, UpdateEmployee, UpdateProfile};
use stafflink_db::models::user::CreateUser;
use stafflink_db::repositories::{EmployeeRepo, UserRepo};
use stafflink_core::fields::RequestField;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str, role: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        role: role.to_string(),
    }
}

fn new_employee(user_id: Option<i64>, matricule: &str) -> CreateEmployee {
    CreateEmployee {
        user_id,
        first_name: "Paul".to_string(),
        last_name: "Durand".to_string(),
        matricule: matricule.to_string(),
        department: "Finance".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: Create and find by id / by linked account
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    let account = UserRepo::create(&pool, &new_user("paul", "employee"))
        .await
        .unwrap();
    let employee = EmployeeRepo::create(&pool, &new_employee(Some(account.id), "EMP300"))
        .await
        .unwrap();
    assert!(employee.is_active);
    assert!(employee.poste.is_none());

    let by_id = EmployeeRepo::find_by_id(&pool, employee.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_id.matricule, "EMP300");

    let by_user = EmployeeRepo::find_by_user_id(&pool, account.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_user.id, employee.id);
}

// ---------------------------------------------------------------------------
// Test: Duplicate matricule violates the unique constraint
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_matricule_rejected(pool: PgPool) {
    EmployeeRepo::create(&pool, &new_employee(None, "EMP300"))
        .await
        .unwrap();

    let result = EmployeeRepo::create(&pool, &new_employee(None, "EMP300")).await;
    assert!(result.is_err(), "duplicate matricule must be rejected");
}

// ---------------------------------------------------------------------------
// Test: HR update touches only provided fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_hr_update(pool: PgPool) {
    let employee = EmployeeRepo::create(&pool, &new_employee(None, "EMP300"))
        .await
        .unwrap();

    let update = UpdateEmployee {
        department: Some("Accounting".to_string()),
        ..Default::default()
    };
    let updated = EmployeeRepo::update(&pool, employee.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.department, "Accounting");
    assert_eq!(updated.first_name, "Paul", "untouched fields survive");
    assert_eq!(updated.matricule, "EMP300");
}

// ---------------------------------------------------------------------------
// Test: Profile update cannot touch activation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_update_self_managed_only(pool: PgPool) {
    let employee = EmployeeRepo::create(&pool, &new_employee(None, "EMP300"))
        .await
        .unwrap();
    EmployeeRepo::deactivate(&pool, employee.id).await.unwrap();

    let update = UpdateProfile {
        poste: Some("Analyst".to_string()),
        email: Some("paul.d@corp.example".to_string()),
        ..Default::default()
    };
    let updated = EmployeeRepo::update_profile(&pool, employee.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.poste.as_deref(), Some("Analyst"));
    assert!(
        !updated.is_active,
        "a profile write must never reactivate the employee"
    );
}

// ---------------------------------------------------------------------------
// Test: apply_field writes exactly one column
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_apply_field(pool: PgPool) {
    let employee = EmployeeRepo::create(&pool, &new_employee(None, "EMP300"))
        .await
        .unwrap();

    let updated = EmployeeRepo::apply_field(&pool, employee.id, RequestField::Poste, "Controller")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.poste.as_deref(), Some("Controller"));
    assert_eq!(updated.field_value(RequestField::Poste), Some("Controller"));
    assert_eq!(updated.last_name, "Durand");
}

// ---------------------------------------------------------------------------
// Test: Deactivate is a one-way flag
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivate(pool: PgPool) {
    let employee = EmployeeRepo::create(&pool, &new_employee(None, "EMP300"))
        .await
        .unwrap();

    assert!(EmployeeRepo::deactivate(&pool, employee.id).await.unwrap());
    // Second call finds nothing active to flip.
    assert!(!EmployeeRepo::deactivate(&pool, employee.id).await.unwrap());

    let stored = EmployeeRepo::find_by_id(&pool, employee.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.is_active);
}
