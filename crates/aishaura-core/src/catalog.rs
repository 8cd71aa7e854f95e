//! # Catalog Module
//!
//! The in-memory mirror of the remote product sheet.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Lifecycle                                 │
//! │                                                                         │
//! │  startup ──► fetch products + reviews ──► Catalog::new(records)        │
//! │                                                │                        │
//! │                                 merge_reviews(normalized map)           │
//! │                                                │                        │
//! │                          replaced WHOLESALE in CatalogState             │
//! │                                                │                        │
//! │        read-only from the cart's perspective ◄─┘                        │
//! │                                                                         │
//! │  After a confirmed order the same path runs again to pick up the       │
//! │  decremented stock numbers.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name Matching
//! Products are keyed by display name. Review rows arrive from a separate
//! sheet whose product names may differ in case or stray whitespace, so
//! matching tries exact first, then a trimmed lowercase comparison.

use std::collections::BTreeMap;

use crate::types::{CustomerReview, ProductRecord};
use crate::Money;

// =============================================================================
// Helpers
// =============================================================================

/// Canonical form used for forgiving product-name matching.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Average rating across a review list, rounded to one decimal.
/// Empty lists rate 0.
pub fn average_rating(reviews: &[CustomerReview]) -> f32 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: f32 = reviews.iter().map(|r| r.rating).sum();
    (total / reviews.len() as f32 * 10.0).round() / 10.0
}

// =============================================================================
// Catalog
// =============================================================================

/// All products currently known to the storefront, in sheet order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<ProductRecord>,
}

impl Catalog {
    /// Builds a catalog from fetched records.
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Catalog { products }
    }

    /// The empty catalog - the fallback when the product fetch fails.
    /// There is no hardcoded demo data.
    pub fn empty() -> Self {
        Catalog::default()
    }

    /// All products in sheet order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by exact name.
    pub fn get(&self, name: &str) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Current per-50 g price for a product, when it exists.
    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.get(name).map(|p| p.price)
    }

    /// Resolves an incoming (possibly differently cased/spaced) name to
    /// the canonical catalog name. Exact match wins over normalized match.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        if let Some(product) = self.get(name) {
            return Some(product.name.as_str());
        }
        let key = normalize_key(name);
        self.products
            .iter()
            .find(|p| normalize_key(&p.name) == key)
            .map(|p| p.name.as_str())
    }

    /// Merges externally fetched reviews into matching products.
    ///
    /// For every matched product the review list is REPLACED (not
    /// appended), the review count follows the list, and the rating is
    /// recomputed from it. Incoming names that match no product are
    /// dropped.
    pub fn merge_reviews(&mut self, reviews_by_product: BTreeMap<String, Vec<CustomerReview>>) {
        for (incoming_name, review_list) in reviews_by_product {
            let Some(target) = self.resolve(&incoming_name).map(str::to_string) else {
                continue;
            };
            if let Some(product) = self.products.iter_mut().find(|p| p.name == target) {
                product.reviews = review_list.len() as i64;
                product.rating = average_rating(&review_list);
                product.customer_reviews = review_list;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: f32) -> CustomerReview {
        CustomerReview {
            name: "Asha".to_string(),
            rating,
            text: "Lovely greens".to_string(),
            date: "Recently".to_string(),
        }
    }

    fn product(name: &str) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            description: None,
            image: None,
            price: Money::from_rupees(100),
            original_price: None,
            quantity_available: 20,
            rating: 0.0,
            reviews: 0,
            customer_reviews: Vec::new(),
            storage: None,
            shelf_life: None,
            harvest_date: None,
        }
    }

    #[test]
    fn test_average_rating_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[]), 0.0);
        assert_eq!(average_rating(&[review(4.0), review(5.0)]), 4.5);
        // (5 + 4 + 4) / 3 = 4.333... → 4.3
        assert_eq!(average_rating(&[review(5.0), review(4.0), review(4.0)]), 4.3);
    }

    #[test]
    fn test_get_and_price_of() {
        let catalog = Catalog::new(vec![product("Sunflower"), product("Radish")]);
        assert!(catalog.get("Sunflower").is_some());
        assert!(catalog.get("sunflower").is_none());
        assert_eq!(catalog.price_of("Radish"), Some(Money::from_rupees(100)));
        assert_eq!(catalog.price_of("Basil"), None);
    }

    #[test]
    fn test_resolve_exact_beats_normalized() {
        let catalog = Catalog::new(vec![product("Sunflower"), product("sunflower ")]);
        assert_eq!(catalog.resolve("Sunflower"), Some("Sunflower"));
        // Normalized fallback picks the first normalized match
        assert_eq!(catalog.resolve("  SUNFLOWER "), Some("Sunflower"));
        assert_eq!(catalog.resolve("Basil"), None);
    }

    #[test]
    fn test_merge_reviews_replaces_and_recomputes() {
        let mut catalog = Catalog::new(vec![product("Sunflower")]);

        let mut incoming = BTreeMap::new();
        incoming.insert(
            "  sunflower".to_string(),
            vec![review(5.0), review(4.0)],
        );
        incoming.insert("Unknown Green".to_string(), vec![review(1.0)]);

        catalog.merge_reviews(incoming);

        let sunflower = catalog.get("Sunflower").unwrap();
        assert_eq!(sunflower.customer_reviews.len(), 2);
        assert_eq!(sunflower.reviews, 2);
        assert_eq!(sunflower.rating, 4.5);
        // The unmatched name changed nothing
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_empty_catalog_fallback() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
