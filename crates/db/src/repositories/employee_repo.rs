//! Repository for the `employees` table.

use sqlx::PgPool;
use stafflink_core::fields::RequestField;
use stafflink_core::types::DbId;

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee, UpdateProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, first_name, last_name, matricule, department, \
    poste, email, phone, photo_url, is_active, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (user_id, first_name, last_name, matricule, department)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(input.user_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.matricule)
            .bind(&input.department)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the employee record linked to an account.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE user_id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all employees, active first, then by last name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employees
             ORDER BY is_active DESC, last_name ASC, first_name ASC"
        );
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// HR update of managed fields. Only non-`None` fields in `input` apply.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                matricule = COALESCE($4, matricule),
                department = COALESCE($5, department),
                user_id = COALESCE($6, user_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.matricule)
            .bind(&input.department)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    /// Employee self-update of the self-managed fields.
    ///
    /// Never touches `is_active`, so an update can never reactivate a
    /// deactivated employee. Omitted fields are left as-is, which also means
    /// a field once set cannot be cleared back to null from here; writing an
    /// empty string is the way to blank one out. Returns `None` if no row
    /// exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                poste = COALESCE($2, poste),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                photo_url = COALESCE($5, photo_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.poste)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.photo_url)
            .fetch_optional(pool)
            .await
    }

    /// Write a single request-targetable field.
    ///
    /// The column name comes from the closed [`RequestField`] enum, never
    /// from caller input. Used by the approval workflow, which applies the
    /// requested value verbatim. Returns `None` if no row exists.
    pub async fn apply_field(
        pool: &PgPool,
        id: DbId,
        field: RequestField,
        value: &str,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let column = field.column();
        let query = format!(
            "UPDATE employees SET {column} = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(value)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate an employee by setting `is_active = false`.
    ///
    /// Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE employees SET is_active = false, updated_at = NOW()
             WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
