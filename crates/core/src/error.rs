//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure in this taxonomy is recoverable and caller-visible; none of
/// them should ever take the page down. Infrastructure concerns stay behind
/// the `Persistence` kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A supplied value was malformed or out of range (e.g. a zero quantity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not allowed against the current state (e.g. adding an
    /// out-of-stock product).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A requested entry was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// A storage write failed. In-memory state remains authoritative; callers
    /// should warn that the change may not survive a reload.
    #[error("persistence failed: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
