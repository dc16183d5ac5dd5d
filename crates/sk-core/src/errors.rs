//! Cross-cutting error types for Stromkreis.
//!
//! Domain-specific errors (e.g. `StoreError`, `ConfigError`) live in their
//! respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised while interpreting shared identifiers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A node key did not match the `"<kind>:<id>"` format.
    #[error("Invalid node key '{0}'")]
    InvalidKey(String),
}
