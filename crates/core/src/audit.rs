//! Audit action tags and target types.
//!
//! This module lives in `core` (zero internal deps) so the closed action set
//! can be used by both the repository layer and any future CLI tooling.
//! Audit entries are append-only and immutable; the recorder itself is
//! best-effort from the caller's perspective (see the api workflow layer).

use serde::{Deserialize, Serialize};

/// Closed set of auditable actions. Consumers filter on the exact tag
/// strings, so variants serialize to stable SCREAMING_SNAKE names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    EmployeeCreated,
    EmployeeUpdated,
    EmployeeDeactivated,
    ProfileSelfUpdated,
    RequestSubmitted,
    RequestApproved,
    RequestRejected,
    QrGenerated,
    QrRevoked,
    VisibilityUpdated,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::EmployeeCreated => "EMPLOYEE_CREATED",
            AuditAction::EmployeeUpdated => "EMPLOYEE_UPDATED",
            AuditAction::EmployeeDeactivated => "EMPLOYEE_DEACTIVATED",
            AuditAction::ProfileSelfUpdated => "PROFILE_SELF_UPDATED",
            AuditAction::RequestSubmitted => "REQUEST_SUBMITTED",
            AuditAction::RequestApproved => "REQUEST_APPROVED",
            AuditAction::RequestRejected => "REQUEST_REJECTED",
            AuditAction::QrGenerated => "QR_GENERATED",
            AuditAction::QrRevoked => "QR_REVOKED",
            AuditAction::VisibilityUpdated => "VISIBILITY_UPDATED",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known audit target types.
pub mod target_types {
    pub const EMPLOYEE: &str = "employee";
    pub const REQUEST: &str = "modification_request";
    pub const TOKEN: &str = "qr_token";
    pub const VISIBILITY: &str = "employee_visibility";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_tags_are_screaming_snake() {
        assert_eq!(AuditAction::RequestApproved.as_str(), "REQUEST_APPROVED");
        assert_eq!(AuditAction::RequestRejected.as_str(), "REQUEST_REJECTED");
        assert_eq!(
            AuditAction::VisibilityUpdated.as_str(),
            "VISIBILITY_UPDATED"
        );
    }

    #[test]
    fn test_action_serializes_to_tag_string() {
        let json = serde_json::to_string(&AuditAction::QrGenerated).unwrap();
        assert_eq!(json, "\"QR_GENERATED\"");
    }
}
