//! Registry errors

use thiserror::Error;

/// Errors from registry providers.
///
/// Variants are `Clone` so a cached load failure can be handed to every
/// caller of the same snapshot (see [`crate::CachedRegistry`]).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Bank data file not found: {0}")]
    NotFound(String),

    #[error("Failed to read bank data: {0}")]
    Io(String),

    #[error("Malformed bank data: {0}")]
    Malformed(String),

    #[error("Bank data source yielded an empty list")]
    Empty,
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
