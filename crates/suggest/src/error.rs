//! Suggestion errors
//!
//! The entry point exposes exactly one failure family. The two variants
//! carry distinct remediation text: a bad account number is the caller's
//! input to fix, missing bank data is an environment problem.

use thiserror::Error;

/// Errors from the suggestion entry point.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SuggestError {
    #[error("Invalid account number: {0}")]
    InvalidAccountNumber(String),

    #[error("No bank data available: {0}")]
    RegistryUnavailable(String),
}

/// Result type for suggestion operations
pub type SuggestResult<T> = Result<T, SuggestError>;
