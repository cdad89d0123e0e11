//! Repository for the `modification_requests` table.

use sqlx::PgPool;
use stafflink_core::status::RequestStatus;
use stafflink_core::types::DbId;

use crate::models::request::{CreateModificationRequest, ModificationRequest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, employee_id, requester_id, target_field, previous_value, \
    requested_value, note, status, reviewer_id, decided_at, decision_comment, created_at";

/// Provides CRUD operations for modification requests.
pub struct RequestRepo;

impl RequestRepo {
    /// Insert a new pending request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateModificationRequest,
    ) -> Result<ModificationRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO modification_requests
                (employee_id, requester_id, target_field, previous_value, requested_value, note, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ModificationRequest>(&query)
            .bind(input.employee_id)
            .bind(input.requester_id)
            .bind(&input.target_field)
            .bind(&input.previous_value)
            .bind(&input.requested_value)
            .bind(&input.note)
            .bind(RequestStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a request by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ModificationRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM modification_requests WHERE id = $1");
        sqlx::query_as::<_, ModificationRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all requests for one employee, newest first.
    pub async fn list_for_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<ModificationRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM modification_requests
             WHERE employee_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ModificationRequest>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// List all pending requests, oldest first (review queue order).
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<ModificationRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM modification_requests
             WHERE status = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, ModificationRequest>(&query)
            .bind(RequestStatus::Pending.as_str())
            .fetch_all(pool)
            .await
    }

    /// Count pending requests (the admin badge; submission fires no push).
    pub async fn pending_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM modification_requests WHERE status = $1",
        )
        .bind(RequestStatus::Pending.as_str())
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Flip a pending request to a terminal status, stamping reviewer,
    /// decision time, and comment.
    ///
    /// The `status = 'pending'` filter makes the transition one-shot without
    /// locks: of two racing decisions, exactly one matches the row. Returns
    /// `None` when the request is missing or already decided.
    pub async fn decide(
        pool: &PgPool,
        id: DbId,
        outcome: RequestStatus,
        reviewer_id: DbId,
        comment: Option<&str>,
    ) -> Result<Option<ModificationRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE modification_requests
             SET status = $2, reviewer_id = $3, decision_comment = $4, decided_at = NOW()
             WHERE id = $1 AND status = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ModificationRequest>(&query)
            .bind(id)
            .bind(outcome.as_str())
            .bind(reviewer_id)
            .bind(comment)
            .bind(RequestStatus::Pending.as_str())
            .fetch_optional(pool)
            .await
    }
}
