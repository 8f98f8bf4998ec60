//! Product catalog: records, search rules, and the read-only collection.
//!
//! Everything here is deterministic domain logic (no IO, no envelope
//! concerns). The catalog is fixed at construction time and never mutated
//! at request time, so it can be shared freely across invocations.

pub mod catalog;
pub mod product;
pub mod search;

pub use catalog::Catalog;
pub use product::{Product, ProductSummary};
pub use search::{sanitize_query, SearchCriteria, SearchResults};
