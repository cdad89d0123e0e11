//! Employee entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stafflink_core::fields::RequestField;
use stafflink_core::types::{DbId, Timestamp};

/// A row from the `employees` table.
///
/// HR-managed fields: `first_name`, `last_name`, `matricule`, `department`.
/// Self-managed fields: `poste`, `email`, `phone`, `photo_url`.
/// Employees are only ever soft-deactivated (`is_active = false`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    /// Linked account, if the employee has portal access.
    pub user_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub matricule: String,
    pub department: String,
    pub poste: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Employee {
    /// Current value of a request-targetable field.
    pub fn field_value(&self, field: RequestField) -> Option<&str> {
        match field {
            RequestField::FirstName => Some(self.first_name.as_str()),
            RequestField::LastName => Some(self.last_name.as_str()),
            RequestField::Poste => self.poste.as_deref(),
            RequestField::Email => self.email.as_deref(),
            RequestField::Phone => self.phone.as_deref(),
        }
    }
}

/// DTO for creating a new employee (HR action).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployee {
    pub user_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub matricule: String,
    pub department: String,
}

/// DTO for an HR update of managed fields. Only non-`None` fields apply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub matricule: Option<String>,
    pub department: Option<String>,
    pub user_id: Option<DbId>,
}

/// DTO for an employee's direct edit of their self-managed fields.
///
/// Deliberately excludes `is_active`: a profile update can never reactivate a
/// deactivated employee.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfile {
    pub poste: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
}
