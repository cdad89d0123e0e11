//! Stafflink domain layer.
//!
//! Zero-internal-dep crate holding the types, closed enumerations, and error
//! taxonomy shared by the repository and API layers: everything a consumer
//! needs to speak the approval/identity-consistency contract without touching
//! the database.

pub mod audit;
pub mod error;
pub mod fields;
pub mod notify;
pub mod qr;
pub mod roles;
pub mod status;
pub mod types;
