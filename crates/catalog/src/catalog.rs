//! The static, read-only product collection.

use storefront_core::{DomainResult, ProductId};

use crate::product::{Product, ProductSummary};
use crate::search::{SearchCriteria, SearchResults};

/// Read-only collection of products, fixed at construction time.
///
/// Lookups and searches are linear scans; the collection is small and
/// never mutated, so no index or locking is needed. Inject a fixture
/// collection in tests via [`Catalog::new`].
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The pre-populated demo inventory served until a real backing store
    /// replaces it.
    pub fn builtin() -> Self {
        Self::new(vec![
            entry(
                "prod-001",
                "Premium Coffee Maker",
                "High-end coffee maker with temperature control and built-in grinder",
                199.99,
                true,
                &[
                    "Temperature control",
                    "Built-in grinder",
                    "Timer",
                    "12-cup capacity",
                ],
            ),
            entry(
                "prod-002",
                "Stainless Electric Kettle",
                "1.7 litre kettle with rapid boil and automatic shut-off",
                49.99,
                true,
                &["Rapid boil", "Automatic shut-off", "1.7 litre capacity"],
            ),
            entry(
                "prod-003",
                "Espresso Grinder Pro",
                "Conical burr grinder with 40 grind settings for espresso and filter",
                129.50,
                false,
                &["Conical burrs", "40 grind settings", "Anti-static chamber"],
            ),
            entry(
                "prod-004",
                "Handheld Milk Frother",
                "Battery powered frother for cappuccino and latte foam",
                24.95,
                true,
                &["Two speeds", "Battery powered", "Dishwasher-safe whisk"],
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up the entry for a well-formed identifier.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.product_id == id)
    }

    /// Linear scan applying the text and price filters.
    ///
    /// Fails only when the criteria carry an invalid price range; the
    /// scan itself cannot fail.
    pub fn search(&self, criteria: &SearchCriteria) -> DomainResult<SearchResults> {
        criteria.validate()?;

        let needle = criteria.needle();
        let results: Vec<ProductSummary> = self
            .products
            .iter()
            .filter(|p| criteria.matches(&needle, p))
            .map(Product::summary)
            .collect();

        Ok(SearchResults {
            total_results: results.len(),
            results,
        })
    }
}

fn entry(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    in_stock: bool,
    features: &[&str],
) -> Product {
    Product {
        product_id: id.parse().expect("builtin catalog id is well-formed"),
        name: name.to_string(),
        description: description.to_string(),
        price,
        in_stock,
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::DomainError;

    fn fixture() -> Catalog {
        Catalog::new(vec![
            entry("prod-101", "Alpha Widget", "A widget for alpha work", 10.0, true, &[]),
            entry("prod-102", "Beta Widget", "A widget for beta work", 20.0, false, &[]),
            entry("prod-103", "Gamma Gadget", "Gadget with widget adapter", 30.0, true, &[]),
        ])
    }

    #[test]
    fn get_returns_stored_entry() {
        let catalog = fixture();
        let id: ProductId = "prod-102".parse().unwrap();
        let product = catalog.get(&id).unwrap();
        assert_eq!(product.name, "Beta Widget");
        assert_eq!(product.price, 20.0);
        assert!(!product.in_stock);
    }

    #[test]
    fn get_misses_absent_entry() {
        let catalog = fixture();
        let id: ProductId = "prod-999".parse().unwrap();
        assert!(catalog.get(&id).is_none());
    }

    #[test]
    fn empty_query_returns_everything() {
        let catalog = fixture();
        let results = catalog.search(&SearchCriteria::default()).unwrap();
        assert_eq!(results.total_results, 3);
        assert_eq!(results.results.len(), 3);
    }

    #[test]
    fn query_matches_name_and_description_case_insensitively() {
        let catalog = fixture();
        let criteria = SearchCriteria {
            query: Some("WIDGET".to_string()),
            ..SearchCriteria::default()
        };
        let results = catalog.search(&criteria).unwrap();
        // prod-103 matches through its description.
        assert_eq!(results.total_results, 3);

        let criteria = SearchCriteria {
            query: Some("gadget".to_string()),
            ..SearchCriteria::default()
        };
        let results = catalog.search(&criteria).unwrap();
        assert_eq!(results.total_results, 1);
        assert_eq!(results.results[0].product_id.as_str(), "prod-103");
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let catalog = fixture();
        let criteria = SearchCriteria {
            min_price: Some(10.0),
            max_price: Some(20.0),
            ..SearchCriteria::default()
        };
        let results = catalog.search(&criteria).unwrap();
        assert_eq!(results.total_results, 2);
        assert!(results.results.iter().all(|s| s.price >= 10.0 && s.price <= 20.0));
    }

    #[test]
    fn inverted_bounds_fail_without_filtering() {
        let catalog = fixture();
        let criteria = SearchCriteria {
            min_price: Some(25.0),
            max_price: Some(5.0),
            ..SearchCriteria::default()
        };
        assert_eq!(
            catalog.search(&criteria).unwrap_err(),
            DomainError::invalid_range(25.0, 5.0)
        );
    }

    #[test]
    fn category_is_a_documented_no_op() {
        let catalog = fixture();
        let with_category = SearchCriteria {
            category: Some("kitchen".to_string()),
            ..SearchCriteria::default()
        };
        let without = catalog.search(&SearchCriteria::default()).unwrap();
        let with = catalog.search(&with_category).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn sanitized_query_is_used_for_matching() {
        let catalog = fixture();
        let criteria = SearchCriteria {
            query: Some("ga-dget!".to_string()),
            ..SearchCriteria::default()
        };
        let results = catalog.search(&criteria).unwrap();
        assert_eq!(results.total_results, 1);
        assert_eq!(results.results[0].name, "Gamma Gadget");
    }

    #[test]
    fn builtin_serves_the_coffee_maker() {
        let catalog = Catalog::builtin();
        let id: ProductId = "prod-001".parse().unwrap();
        let product = catalog.get(&id).unwrap();
        assert_eq!(product.name, "Premium Coffee Maker");
        assert_eq!(product.price, 199.99);
        assert!(product.in_stock);
        assert_eq!(product.features.len(), 4);
    }

    #[test]
    fn builtin_coffee_above_price_cap_yields_nothing() {
        let catalog = Catalog::builtin();
        let criteria = SearchCriteria {
            query: Some("coffee".to_string()),
            max_price: Some(100.0),
            ..SearchCriteria::default()
        };
        let results = catalog.search(&criteria).unwrap();
        assert_eq!(results.total_results, 0);
        assert!(results.results.is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use crate::search::sanitize_query;
        use proptest::prelude::*;

        proptest! {
            /// Property: sanitization is idempotent.
            #[test]
            fn sanitize_is_idempotent(raw in ".{0,64}") {
                let once = sanitize_query(&raw);
                let twice = sanitize_query(&once);
                prop_assert_eq!(once, twice);
            }

            /// Property: sanitized output contains only alphanumeric or
            /// whitespace characters.
            #[test]
            fn sanitize_leaves_only_alphanumeric_and_whitespace(raw in ".{0,64}") {
                let clean = sanitize_query(&raw);
                prop_assert!(clean.chars().all(|c| c.is_alphanumeric() || c.is_whitespace()));
            }

            /// Property: an inverted range always fails, regardless of the
            /// rest of the criteria.
            #[test]
            fn inverted_range_always_fails(
                max in 0.0f64..1000.0,
                gap in 0.001f64..1000.0,
                query in proptest::option::of("[a-z ]{0,16}"),
            ) {
                let criteria = SearchCriteria {
                    query,
                    min_price: Some(max + gap),
                    max_price: Some(max),
                    ..SearchCriteria::default()
                };
                prop_assert!(Catalog::builtin().search(&criteria).is_err());
            }

            /// Property: no result ever falls outside the requested bounds.
            #[test]
            fn results_respect_price_bounds(
                min in 0.0f64..500.0,
                span in 0.0f64..500.0,
            ) {
                let criteria = SearchCriteria {
                    min_price: Some(min),
                    max_price: Some(min + span),
                    ..SearchCriteria::default()
                };
                let results = Catalog::builtin().search(&criteria).unwrap();
                prop_assert!(results
                    .results
                    .iter()
                    .all(|s| s.price >= min && s.price <= min + span));
            }

            /// Property: an empty or fully-stripped query matches the whole
            /// catalog.
            #[test]
            fn symbol_only_query_matches_everything(raw in "[!@#$%^&*()<>/\\\\-]{1,12}") {
                let catalog = Catalog::builtin();
                let criteria = SearchCriteria {
                    query: Some(raw),
                    ..SearchCriteria::default()
                };
                let results = catalog.search(&criteria).unwrap();
                prop_assert_eq!(results.total_results, catalog.len());
            }
        }
    }
}
