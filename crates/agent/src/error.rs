//! Invocation-level error taxonomy and its external representation.

use serde_json::{json, Value};
use thiserror::Error;

use storefront_core::DomainError;

/// Everything that can go wrong while handling one invocation.
///
/// Mirrors the layering of the domain error: catalog failures arrive via
/// `Domain`, parameter and routing failures are declared here, and
/// `Unexpected` is the boundary catch-all.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HandlerError {
    /// A parameter the operation cannot run without was absent or empty.
    /// Carries the human-facing label used in the response body.
    #[error("{0} is required")]
    MissingParameter(&'static str),

    /// A numeric parameter value was present but not parseable.
    #[error("invalid price format: {0}")]
    InvalidPriceFormat(String),

    /// The envelope named an operation this handler does not serve.
    #[error("unsupported api path: {0}")]
    UnsupportedPath(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Anything unanticipated. The message stays internal; callers only
    /// ever see the generic body.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl HandlerError {
    pub fn missing(label: &'static str) -> Self {
        Self::MissingParameter(label)
    }

    pub fn invalid_price(raw: impl Into<String>) -> Self {
        Self::InvalidPriceFormat(raw.into())
    }

    pub fn unsupported_path(path: impl Into<String>) -> Self {
        Self::UnsupportedPath(path.into())
    }

    pub fn unexpected(err: impl core::fmt::Display) -> Self {
        Self::Unexpected(err.to_string())
    }

    /// Stable category label. This is the only part of a failure that is
    /// ever logged.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "missing_parameter",
            Self::InvalidPriceFormat(_) => "invalid_price_format",
            Self::UnsupportedPath(_) => "unsupported_path",
            Self::Domain(DomainError::InvalidId(_)) => "invalid_id",
            Self::Domain(DomainError::NotFound(_)) => "not_found",
            Self::Domain(DomainError::InvalidRange { .. }) => "invalid_range",
            Self::Unexpected(_) => "unexpected",
        }
    }

    /// External JSON body for this failure.
    ///
    /// Known kinds keep their structured shape (echoing the offending
    /// value where the contract calls for it); `Unexpected` degrades to a
    /// generic message so no internal detail crosses the boundary.
    pub fn into_body(self) -> Value {
        match self {
            Self::Domain(DomainError::InvalidId(id)) => json!({
                "error": "Invalid product ID format",
                "productId": id,
            }),
            Self::Domain(DomainError::NotFound(id)) => json!({
                "error": "Product not found",
                "productId": id,
            }),
            Self::Domain(DomainError::InvalidRange { .. }) => json!({
                "error": "Invalid price range",
                "results": [],
                "totalResults": 0,
            }),
            Self::MissingParameter(label) => json!({
                "error": format!("{label} is required"),
            }),
            Self::InvalidPriceFormat(_) => json!({
                "error": "Invalid price format",
            }),
            Self::UnsupportedPath(path) => json!({
                "error": "Unsupported API path",
                "apiPath": path,
            }),
            Self::Unexpected(_) => json!({
                "error": "An unexpected error occurred during request processing",
            }),
        }
    }
}
