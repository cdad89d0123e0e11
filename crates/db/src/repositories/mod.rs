//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod audit_repo;
pub mod employee_repo;
pub mod notification_repo;
pub mod request_repo;
pub mod token_repo;
pub mod user_repo;
pub mod visibility_repo;

pub use audit_repo::AuditLogRepo;
pub use employee_repo::EmployeeRepo;
pub use notification_repo::NotificationRepo;
pub use request_repo::RequestRepo;
pub use token_repo::TokenRepo;
pub use user_repo::UserRepo;
pub use visibility_repo::VisibilityRepo;
