//! Account role name constants.

/// HR administrator: manages employees, decides requests, owns QR tokens.
pub const ROLE_ADMIN: &str = "admin";

/// Regular employee account: self-service profile and own notifications.
pub const ROLE_EMPLOYEE: &str = "employee";
