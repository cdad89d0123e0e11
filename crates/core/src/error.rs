use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The target is in a state that forbids the operation (e.g. deciding an
    /// already-decided request, generating a token for a deactivated employee).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A broken data invariant (e.g. more than one active QR token for one
    /// employee). Surfaced instead of silently picking a row.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A collaborator (database, downstream service) failed; retryable.
    #[error("Dependency failure: {0}")]
    Dependency(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
