//! Account entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflink_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// Accounts are the identity side of the system: admins decide requests and
/// receive QR-refresh notifications; employee accounts link to an employee
/// record via `employees.user_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new account.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub role: String,
}
