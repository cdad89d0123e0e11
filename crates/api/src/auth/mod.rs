//! Authentication building blocks (JWT claims and configuration).

pub mod jwt;
