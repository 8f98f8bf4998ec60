//! Strongly-typed product identifier.

use core::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Catalog identifiers follow a fixed `prod-NNN` pattern.
static PRODUCT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^prod-\d{3}$").expect("product id pattern compiles"));

/// Identifier of a catalog product.
///
/// Construction goes through [`FromStr`], which enforces the pattern.
/// Parse at the boundary so malformed input is rejected before any
/// lookup happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if PRODUCT_ID_PATTERN.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(DomainError::invalid_id(s))
        }
    }
}
