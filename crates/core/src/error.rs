//! Domain error model.

use thiserror::Error;

use crate::id::SweetId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, missing records). Transport and auth concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The requested sweet does not exist.
    #[error("sweet not found: {0}")]
    NotFound(SweetId),

    /// A purchase asked for more units than are in stock.
    ///
    /// User-recoverable: retrying with a smaller amount may succeed.
    #[error("insufficient stock for sweet: {0}")]
    InsufficientStock(SweetId),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
