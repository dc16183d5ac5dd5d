//! Store error types for sk-store.

use sk_core::identity::EntityId;
use thiserror::Error;

/// Errors from store reads and mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed row does not exist.
    #[error("{table} {id} not found")]
    NotFound { table: &'static str, id: EntityId },

    /// A new or updated row points at a missing or wrongly typed row.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// A uniqueness constraint would be violated.
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// A snapshot file could not be read or parsed.
    #[error("Snapshot I/O failed: {0}")]
    Snapshot(String),
}
