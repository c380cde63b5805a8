//! Unified error type for the domain layer.
//!
//! The generator and composer never fail for inputs in their declared
//! domains - every table lookup has a fallback. `DomainError` covers the
//! boundary only: parsing user-supplied strings into domain enums.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
