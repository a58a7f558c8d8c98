//! Domain-level errors.
//!
//! These errors represent business rule violations detected before any
//! storage call. They are independent of the database layer.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A user write was attempted without its owned address
    #[error("user: invalid address fields")]
    InvalidAddress,

    /// An identifier could not be parsed
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl DomainError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(value: impl Into<String>) -> Self {
        DomainError::InvalidIdentifier(value.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
