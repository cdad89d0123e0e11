//! Modification request entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflink_core::status::Decision;
use stafflink_core::types::{DbId, Timestamp};

/// A row from the `modification_requests` table.
///
/// Rows are never deleted; together with the audit log they form the change
/// history of the employee record. `previous_value` is the snapshot taken at
/// submission time -- the reviewer always sees what the requester saw, even
/// if the field drifted in the interim.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModificationRequest {
    pub id: DbId,
    pub employee_id: DbId,
    pub requester_id: DbId,
    pub target_field: String,
    pub previous_value: Option<String>,
    pub requested_value: String,
    pub note: Option<String>,
    pub status: String,
    pub reviewer_id: Option<DbId>,
    pub decided_at: Option<Timestamp>,
    pub decision_comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new pending request.
#[derive(Debug, Clone)]
pub struct CreateModificationRequest {
    pub employee_id: DbId,
    pub requester_id: DbId,
    pub target_field: String,
    pub previous_value: Option<String>,
    pub requested_value: String,
    pub note: Option<String>,
}

/// Request body for the submit endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    pub target_field: String,
    pub requested_value: String,
    pub note: Option<String>,
}

/// Request body for the decide endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DecideRequest {
    pub outcome: Decision,
    pub comment: Option<String>,
}
