//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of catalog queries
/// (malformed identifiers, missing entries, inverted price ranges).
/// Envelope/transport concerns belong in the boundary crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// An identifier did not match the required `prod-NNN` pattern.
    /// Carries the offending value so responses can echo it.
    #[error("invalid product id format: {0}")]
    InvalidId(String),

    /// No catalog entry exists for a well-formed identifier.
    #[error("product not found: {0}")]
    NotFound(String),

    /// Price bounds do not describe a non-negative, non-empty interval.
    #[error("invalid price range: {min}..{max}")]
    InvalidRange { min: f64, max: f64 },
}

impl DomainError {
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId(id.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn invalid_range(min: f64, max: f64) -> Self {
        Self::InvalidRange { min, max }
    }
}
