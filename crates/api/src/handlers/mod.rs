//! HTTP request handlers, one module per resource.

pub mod audit;
pub mod employee;
pub mod notification;
pub mod profile;
pub mod public;
pub mod qr;
pub mod request;
pub mod visibility;
