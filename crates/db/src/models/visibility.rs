//! Per-field visibility flag model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflink_core::types::{DbId, Timestamp};

/// A row from the `employee_visibility` table, unique per
/// (employee_id, field_key).
///
/// A missing row means private: the public profile renders a field only when
/// an explicit `is_public = true` row exists (fail-closed).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VisibilityFlag {
    pub id: DbId,
    pub employee_id: DbId,
    pub field_key: String,
    pub is_public: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for the visibility toggle endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SetVisibility {
    pub field_key: String,
    pub is_public: bool,
}
