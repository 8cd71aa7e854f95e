//! # Product Fetch & Inventory Decrement
//!
//! Reads the product sheet and, after a confirmed order, asks the sheet
//! to decrement stock.
//!
//! ## Wire vs Domain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductRow (wire)                 ProductRecord (domain)              │
//! │  ─────────────────                 ──────────────────────              │
//! │  price: 87.5 | "87.5" | junk  ──►  price: Money (paise; junk → 0)      │
//! │  quantityAvailable: 12 | "12" ──►  quantity_available: i64 (junk → 0)  │
//! │  rating: absent/junk          ──►  recomputed from customerReviews     │
//! │  reviews: absent/junk         ──►  customerReviews.len()               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The conversion happens once, here; everything above this crate works
//! with clean domain types.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use aishaura_core::catalog::average_rating;
use aishaura_core::money::Money;
use aishaura_core::types::ProductRecord;

use crate::client::SheetsClient;
use crate::coerce::{value_to_f32, value_to_i64};
use crate::error::{SheetsError, SheetsResult};
use crate::reviews::parse_review_array;

// =============================================================================
// Wire Types
// =============================================================================

/// The products endpoint envelope: `{success, data: {<name>: row}}`.
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<BTreeMap<String, ProductRow>>,
}

/// One product row as the sheet sends it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default, with = "aishaura_core::money::rupees")]
    price: Money,
    #[serde(default, with = "aishaura_core::money::rupees::option")]
    original_price: Option<Money>,
    #[serde(default)]
    quantity_available: Option<Value>,
    #[serde(default)]
    rating: Option<Value>,
    #[serde(default)]
    reviews: Option<Value>,
    #[serde(default)]
    customer_reviews: Option<Value>,
    #[serde(default)]
    storage: Option<String>,
    #[serde(default)]
    shelf_life: Option<String>,
    #[serde(default)]
    harvest_date: Option<String>,
}

impl ProductRow {
    /// Converts the row into the domain record, applying the documented
    /// defaults. `key` is the map key the row was filed under - the
    /// canonical name when the row's own name cell is blank.
    fn into_record(self, key: &str) -> ProductRecord {
        let customer_reviews = self
            .customer_reviews
            .as_ref()
            .map(parse_review_array)
            .unwrap_or_default();

        let reviews = self
            .reviews
            .as_ref()
            .and_then(value_to_i64)
            .unwrap_or(customer_reviews.len() as i64);

        let rating = self
            .rating
            .as_ref()
            .and_then(value_to_f32)
            .unwrap_or_else(|| average_rating(&customer_reviews));

        ProductRecord {
            name: self
                .name
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(key)
                .to_string(),
            description: self.description,
            image: self.image,
            price: self.price,
            original_price: self.original_price,
            quantity_available: self
                .quantity_available
                .as_ref()
                .and_then(value_to_i64)
                .unwrap_or(0),
            rating,
            reviews,
            customer_reviews,
            storage: self.storage,
            shelf_life: self.shelf_life,
            harvest_date: self.harvest_date,
        }
    }
}

/// Converts a parsed envelope into domain records.
fn records_from_response(response: ProductsResponse) -> SheetsResult<Vec<ProductRecord>> {
    let data = match (response.success, response.data) {
        (true, Some(data)) => data,
        _ => {
            return Err(SheetsError::Api {
                message: "Products API returned unexpected format".to_string(),
            })
        }
    };

    Ok(data
        .into_iter()
        .map(|(key, row)| row.into_record(&key))
        .collect())
}

// =============================================================================
// Quantity Update
// =============================================================================

/// Receipt of an inventory decrement.
///
/// Expected but not required - the order flow has already confirmed by the
/// time these calls run, so callers only log what they get.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityUpdate {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub previous_quantity: Option<i64>,
    #[serde(default)]
    pub new_quantity: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Fetch & Decrement
// =============================================================================

impl SheetsClient {
    /// Fetches the product sheet.
    ///
    /// Any failure (transport, non-2xx, bad shape, `success: false`) is an
    /// error; the shell falls back to an EMPTY catalog - there is no
    /// hardcoded demo data.
    pub async fn fetch_products(&self) -> SheetsResult<Vec<ProductRecord>> {
        let response = self
            .http()
            .get(self.config().products_api_base.as_str())
            .query(&[("action", "products")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status {
                status: status.as_u16(),
            });
        }

        let parsed: ProductsResponse = response
            .json()
            .await
            .map_err(|e| SheetsError::Parse(e.to_string()))?;

        let records = records_from_response(parsed)?;
        debug!(products = records.len(), "product sheet fetched");
        Ok(records)
    }

    /// Asks the sheet to reduce a product's stock by `packs` 50 g units.
    ///
    /// Fire-and-forget from the order flow's perspective: the caller logs
    /// failures and never lets them touch the already-confirmed order.
    pub async fn reduce_quantity(&self, product: &str, packs: i64) -> SheetsResult<QuantityUpdate> {
        let response = self
            .http()
            .get(self.config().products_api_base.as_str())
            .query(&[
                ("action", "updateQuantity"),
                ("product", product),
                ("reduction", &packs.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status {
                status: status.as_u16(),
            });
        }

        let update: QuantityUpdate = response
            .json()
            .await
            .map_err(|e| SheetsError::Parse(e.to_string()))?;

        if !update.success {
            return Err(SheetsError::Api {
                message: update
                    .error
                    .clone()
                    .unwrap_or_else(|| format!("Could not update quantity for {product}")),
            });
        }

        Ok(update)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> SheetsResult<Vec<ProductRecord>> {
        records_from_response(serde_json::from_value(value).expect("envelope should parse"))
    }

    #[test]
    fn test_happy_row_conversion() {
        let records = parse(json!({
            "success": true,
            "data": {
                "Sunflower": {
                    "name": "Sunflower",
                    "price": 100,
                    "originalPrice": 125,
                    "quantityAvailable": "12",
                    "rating": 4.5,
                    "reviews": 3,
                    "customerReviews": [{"name": "Asha", "rating": 5}]
                }
            }
        }))
        .unwrap();

        let p = &records[0];
        assert_eq!(p.name, "Sunflower");
        assert_eq!(p.price, Money::from_rupees(100));
        assert_eq!(p.original_price, Some(Money::from_rupees(125)));
        assert_eq!(p.quantity_available, 12);
        assert_eq!(p.rating, 4.5);
        assert_eq!(p.reviews, 3);
        assert_eq!(p.customer_reviews.len(), 1);
    }

    #[test]
    fn test_messy_row_gets_defaults() {
        let records = parse(json!({
            "success": true,
            "data": {
                "Radish": {
                    "price": "junk",
                    "quantityAvailable": "out",
                    "rating": "n/a",
                    "customerReviews": [{"rating": 4}, {"rating": 5}]
                }
            }
        }))
        .unwrap();

        let p = &records[0];
        // Name falls back to the map key
        assert_eq!(p.name, "Radish");
        assert_eq!(p.price, Money::zero());
        assert_eq!(p.quantity_available, 0);
        // Review count and rating recomputed from the inline list
        assert_eq!(p.reviews, 2);
        assert_eq!(p.rating, 4.5);
    }

    #[test]
    fn test_unexpected_format_is_an_error() {
        assert!(matches!(
            parse(json!({"success": false, "data": {}})),
            Err(SheetsError::Api { .. })
        ));
        assert!(matches!(
            parse(json!({"success": true})),
            Err(SheetsError::Api { .. })
        ));
    }

    #[test]
    fn test_quantity_update_parses_sparse_responses() {
        let update: QuantityUpdate = serde_json::from_value(json!({
            "success": true,
            "previousQuantity": 12,
            "newQuantity": 10
        }))
        .unwrap();
        assert!(update.success);
        assert_eq!(update.previous_quantity, Some(12));
        assert_eq!(update.new_quantity, Some(10));

        let update: QuantityUpdate = serde_json::from_value(json!({"success": false})).unwrap();
        assert!(!update.success);
        assert_eq!(update.previous_quantity, None);
    }
}
