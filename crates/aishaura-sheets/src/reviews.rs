//! # Review Fetch & Normalization
//!
//! The reviews endpoint has gone through several sheet layouts, and the
//! deployed script still answers in whichever shape the row source is in.
//! All of them must keep working.
//!
//! ## Accepted Shapes (fall-through priority order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. { success, data: { "Sunflower": [ {review}, ... ] } }              │
//! │  2. { success, data: { "Sunflower": { customerReviews|reviews: [..] } }│
//! │  3. { success, data: [ { product|productName|product_name|name, .. } ]│
//! │     optionally with a top-level "product" applying to every entry      │
//! │  4. { reviews: [ ... ] }  or a bare top-level array                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each shape is a variant of one untagged enum, so the priority order is
//! exactly the variant order, and [`normalize`] flattens every variant
//! into the same per-product map.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use aishaura_core::types::CustomerReview;

use crate::client::SheetsClient;
use crate::coerce::value_to_f32;
use crate::error::{SheetsError, SheetsResult};

/// Reviews grouped by (not yet catalog-resolved) product name.
pub type ReviewsByProduct = BTreeMap<String, Vec<CustomerReview>>;

// =============================================================================
// Raw Review Row
// =============================================================================

/// One review row as the sheet sends it. Every field is optional;
/// [`RawReview::sanitize`] applies the documented defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    /// Reviewer name - doubles as the product reference of last resort
    /// in flat-array payloads.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub rating: Option<Value>,

    /// Review body; older sheets used `review` or `comment` columns.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    /// Product reference in flat-array payloads.
    #[serde(default, alias = "productName", alias = "product_name")]
    pub product: Option<String>,
}

impl RawReview {
    /// The product this row belongs to, if the row says at all.
    fn product_ref(&self) -> Option<&str> {
        self.product
            .as_deref()
            .or(self.name.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Converts to the domain review, applying defaults for anything the
    /// sheet row left blank.
    pub fn sanitize(&self) -> CustomerReview {
        let text = self
            .text
            .as_deref()
            .or(self.review.as_deref())
            .or(self.comment.as_deref())
            .map(str::trim)
            .unwrap_or("")
            .to_string();

        CustomerReview {
            name: self
                .name
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or("Anonymous")
                .to_string(),
            rating: self.rating.as_ref().and_then(value_to_f32).unwrap_or(0.0),
            text,
            date: self
                .date
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or("Recently")
                .to_string(),
        }
    }
}

/// Parses a raw JSON value that should be a review array; anything that
/// isn't one yields an empty list (used for inline `customerReviews`
/// columns on product rows).
pub(crate) fn parse_review_array(value: &Value) -> Vec<CustomerReview> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value::<RawReview>(item.clone()).ok())
            .map(|raw| raw.sanitize())
            .collect(),
        _ => Vec::new(),
    }
}

// =============================================================================
// Response Shapes
// =============================================================================

/// A per-product entry in the keyed shapes: either a bare array (shape 1)
/// or a wrapper object (shape 2).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum KeyedReviews {
    List(Vec<RawReview>),
    Wrapped {
        #[serde(rename = "customerReviews", alias = "reviews", default)]
        customer_reviews: Vec<RawReview>,
    },
}

impl KeyedReviews {
    fn into_list(self) -> Vec<RawReview> {
        match self {
            KeyedReviews::List(list) => list,
            KeyedReviews::Wrapped { customer_reviews } => customer_reviews,
        }
    }
}

/// The reviews endpoint response, as a tagged union of the known shapes.
/// Variant order is the fall-through priority order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReviewsResponse {
    /// Shapes 1 & 2: keyed-by-product object.
    Keyed {
        data: BTreeMap<String, KeyedReviews>,
    },
    /// Shape 3: flat array with per-item product references, optionally
    /// scoped by a top-level `product`.
    Flat {
        #[serde(default)]
        product: Option<String>,
        data: Vec<RawReview>,
    },
    /// Shape 4a: `{ reviews: [...] }`.
    Wrapped { reviews: Vec<RawReview> },
    /// Shape 4b: bare top-level array.
    Bare(Vec<RawReview>),
}

// =============================================================================
// Normalization
// =============================================================================

/// Flattens any accepted response shape into a per-product review map.
///
/// Rows with no usable product reference are dropped; empty product keys
/// are dropped; every surviving review has the sanitized defaults applied.
pub fn normalize(response: ReviewsResponse) -> ReviewsByProduct {
    let mut by_product = ReviewsByProduct::new();

    let mut attach = |product: &str, raw: &RawReview| {
        let key = product.trim();
        if key.is_empty() {
            return;
        }
        by_product
            .entry(key.to_string())
            .or_default()
            .push(raw.sanitize());
    };

    match response {
        ReviewsResponse::Keyed { data } => {
            for (product, entry) in data {
                for raw in entry.into_list() {
                    attach(&product, &raw);
                }
            }
        }
        ReviewsResponse::Flat { product, data } => match product {
            Some(product) => {
                for raw in &data {
                    attach(&product, raw);
                }
            }
            None => {
                for raw in &data {
                    if let Some(product) = raw.product_ref().map(str::to_string) {
                        attach(&product, raw);
                    }
                }
            }
        },
        ReviewsResponse::Wrapped { reviews } | ReviewsResponse::Bare(reviews) => {
            for raw in &reviews {
                if let Some(product) = raw.product_ref().map(str::to_string) {
                    attach(&product, raw);
                }
            }
        }
    }

    by_product
}

// =============================================================================
// Fetch
// =============================================================================

impl SheetsClient {
    /// Fetches and normalizes the review sheet.
    ///
    /// Failures here are soft for the storefront: the caller logs and
    /// serves the catalog without merged reviews.
    pub async fn fetch_reviews(&self) -> SheetsResult<ReviewsByProduct> {
        let response = self.http().get(self.config().reviews_url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status {
                status: status.as_u16(),
            });
        }

        let parsed: ReviewsResponse = response
            .json()
            .await
            .map_err(|e| SheetsError::Parse(e.to_string()))?;

        let by_product = normalize(parsed);
        debug!(products = by_product.len(), "reviews fetched");
        Ok(by_product)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ReviewsByProduct {
        normalize(serde_json::from_value(value).expect("shape should parse"))
    }

    #[test]
    fn test_shape_keyed_arrays() {
        let map = parse(json!({
            "success": true,
            "data": {
                "Sunflower": [
                    {"name": "Asha", "rating": 5, "text": "Great", "date": "1 Jan"},
                    {"name": "Ravi", "rating": 4}
                ]
            }
        }));

        let reviews = &map["Sunflower"];
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].name, "Asha");
        assert_eq!(reviews[1].text, "");
        assert_eq!(reviews[1].date, "Recently");
    }

    #[test]
    fn test_shape_keyed_wrapper_objects() {
        let map = parse(json!({
            "success": true,
            "data": {
                "Radish": {"customerReviews": [{"name": "Meena", "rating": "4.5"}]},
                "Pea Shoot": {"reviews": [{"rating": 3}]}
            }
        }));

        assert_eq!(map["Radish"][0].rating, 4.5);
        assert_eq!(map["Pea Shoot"][0].name, "Anonymous");
    }

    #[test]
    fn test_shape_flat_array_with_product_refs() {
        let map = parse(json!({
            "success": true,
            "data": [
                {"product": "Sunflower", "name": "Asha", "rating": 5},
                {"productName": "Radish", "rating": 4},
                {"product_name": "Radish", "rating": 3},
                {"rating": 2}
            ]
        }));

        assert_eq!(map["Sunflower"].len(), 1);
        assert_eq!(map["Radish"].len(), 2);
        // The row with no product reference at all is dropped
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_shape_flat_array_with_top_level_product() {
        let map = parse(json!({
            "success": true,
            "product": "Sunflower",
            "data": [{"rating": 5}, {"rating": 4}]
        }));

        assert_eq!(map["Sunflower"].len(), 2);
    }

    #[test]
    fn test_shape_wrapped_reviews_key() {
        let map = parse(json!({
            "reviews": [{"product": "Basil", "rating": 5, "review": "So fresh"}]
        }));

        assert_eq!(map["Basil"][0].text, "So fresh");
    }

    #[test]
    fn test_shape_bare_array_uses_name_as_last_resort() {
        let map = parse(json!([
            {"name": "Sunflower", "rating": 4, "comment": "Crunchy"}
        ]));

        // `name` doubles as product ref and reviewer name in this shape
        let reviews = &map["Sunflower"];
        assert_eq!(reviews[0].name, "Sunflower");
        assert_eq!(reviews[0].text, "Crunchy");
    }

    #[test]
    fn test_sanitize_defaults() {
        let raw: RawReview = serde_json::from_value(json!({"rating": "junk"})).unwrap();
        let review = raw.sanitize();
        assert_eq!(review.name, "Anonymous");
        assert_eq!(review.rating, 0.0);
        assert_eq!(review.text, "");
        assert_eq!(review.date, "Recently");
    }

    #[test]
    fn test_parse_review_array_tolerates_junk() {
        assert!(parse_review_array(&json!("not an array")).is_empty());
        let list = parse_review_array(&json!([{"name": "A", "rating": 5}]));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_empty_product_keys_are_dropped() {
        let map = parse(json!({
            "success": true,
            "data": {"   ": [{"rating": 5}]}
        }));
        assert!(map.is_empty());
    }
}
