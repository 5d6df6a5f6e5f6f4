use crate::types::DbId;

/// Domain-level error taxonomy shared by every crate in the workspace.
///
/// A `Validation` failure is always recoverable by the caller correcting
/// its input; it aborts the operation before anything is written.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
