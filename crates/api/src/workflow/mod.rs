//! Approval & identity-consistency workflows.
//!
//! The orchestration layer between HTTP handlers and repositories. Each
//! operation runs request-scoped to completion, re-deriving state from the
//! store rather than trusting caller-held state, and follows one rule
//! throughout: primary effects (status flips, field writes, token inserts)
//! propagate their errors; secondary effects (notifications, audit entries)
//! are wrapped in their own failure boundary and never alter the primary
//! outcome.

pub mod audit;
pub mod qr;
pub mod refresh;
pub mod requests;
