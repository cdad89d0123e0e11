//! Repository for the `employee_visibility` table.

use sqlx::PgPool;
use stafflink_core::types::DbId;

use crate::models::visibility::VisibilityFlag;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, employee_id, field_key, is_public, created_at, updated_at";

/// Provides read/upsert operations for visibility flags.
///
/// Rows are upserted, never deleted. Absent rows are the caller's cue to
/// treat a field as private.
pub struct VisibilityRepo;

impl VisibilityRepo {
    /// List all explicit flags for an employee, ordered by field key.
    pub async fn list_for_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<VisibilityFlag>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employee_visibility
             WHERE employee_id = $1
             ORDER BY field_key ASC"
        );
        sqlx::query_as::<_, VisibilityFlag>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// Upsert a flag keyed on (employee_id, field_key). Idempotent.
    pub async fn upsert(
        pool: &PgPool,
        employee_id: DbId,
        field_key: &str,
        is_public: bool,
    ) -> Result<VisibilityFlag, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee_visibility (employee_id, field_key, is_public)
             VALUES ($1, $2, $3)
             ON CONFLICT (employee_id, field_key)
             DO UPDATE SET is_public = EXCLUDED.is_public, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VisibilityFlag>(&query)
            .bind(employee_id)
            .bind(field_key)
            .bind(is_public)
            .fetch_one(pool)
            .await
    }

    /// The set of field keys explicitly marked public for an employee.
    pub async fn public_keys(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT field_key FROM employee_visibility
             WHERE employee_id = $1 AND is_public = true
             ORDER BY field_key ASC",
        )
        .bind(employee_id)
        .fetch_all(pool)
        .await
    }
}
