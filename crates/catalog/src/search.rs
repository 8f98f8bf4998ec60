//! Search criteria, query sanitization, and the filtering rules.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

use crate::product::{Product, ProductSummary};

/// Characters stripped from free-text queries before matching: everything
/// that is not alphanumeric or whitespace.
static QUERY_STRIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\pL\pN\s]").expect("query strip pattern compiles"));

/// Per-request search parameters. Built from the invocation's parameter
/// list, discarded after use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub query: Option<String>,
    /// Accepted on the wire but intentionally not consulted by filtering.
    /// Kept so the request contract stays stable while category data is
    /// absent from the catalog.
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SearchCriteria {
    /// When both bounds are present they must describe a non-negative,
    /// non-empty interval (0 <= min <= max). A lone bound is always
    /// acceptable.
    pub fn validate(&self) -> DomainResult<()> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min < 0.0 || min > max {
                return Err(DomainError::invalid_range(min, max));
            }
        }
        Ok(())
    }

    /// Sanitized, lowercased needle for substring matching. Empty when no
    /// query was supplied or nothing survives sanitization.
    pub(crate) fn needle(&self) -> String {
        self.query
            .as_deref()
            .map(sanitize_query)
            .unwrap_or_default()
            .to_lowercase()
    }

    pub(crate) fn matches(&self, needle: &str, product: &Product) -> bool {
        if !needle.is_empty()
            && !product.name.to_lowercase().contains(needle)
            && !product.description.to_lowercase().contains(needle)
        {
            return false;
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

/// Strip every character that is not alphanumeric or whitespace.
///
/// Idempotent: sanitizing already-sanitized text is a no-op.
pub fn sanitize_query(raw: &str) -> String {
    QUERY_STRIP_PATTERN.replace_all(raw, "").into_owned()
}

/// Search outcome: matching summaries plus the total count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub results: Vec<ProductSummary>,
    pub total_results: usize,
}
