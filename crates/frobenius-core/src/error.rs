//! Error types for numerical semigroup operations

use thiserror::Error;

/// Main error type for semigroup construction and search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrobeniusError {
    /// Malformed input: empty generator set, negative target, non-positive generator.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested quantity does not exist for this generator set.
    #[error("Undefined result: {0}")]
    UndefinedResult(String),

    /// Arithmetic left the range of the integer types in use.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

/// Result type alias for semigroup operations
pub type Result<T> = std::result::Result<T, FrobeniusError>;
