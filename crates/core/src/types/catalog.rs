//! Catalog item and fetch-result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single entry in the remote service catalog.
///
/// Items arrive from the catalog API and are immutable once fetched. Every
/// field carries a serde default so a sparse remote record never fails to
/// deserialize; consumers render optional fields conditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogItem {
    /// Identifier, unique within a single fetch.
    pub id: i64,
    /// Service name (e.g., "Deep Home Cleaning").
    pub service: String,
    /// Variant name (e.g., "San Francisco - 2 Bedroom").
    pub variant: String,
    /// Short free-text description.
    pub description: String,
    /// Longer "about" block.
    pub about: String,
    /// Current price in the catalog currency.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Market (list) price. Only meaningful as a discount reference when
    /// strictly greater than `price`.
    #[serde(with = "rust_decimal::serde::float")]
    pub market_price: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Average rating as a numeric string; may be empty.
    pub rating: String,
    /// Number of customers served.
    pub customers: i64,
    /// Delivery time in days.
    pub delivery_days: i64,
    /// Category label used for filtering.
    pub category: String,
    /// External detail-page URL.
    pub url: String,
    /// Unit label (e.g., "per visit").
    pub unit: String,
}

impl CatalogItem {
    /// Whether the market price represents a real discount reference.
    ///
    /// True only when the market price is strictly greater than the current
    /// price; equal or lower market prices are display noise from the source.
    #[must_use]
    pub fn discounted(&self) -> bool {
        self.market_price > self.price
    }
}

/// Outcome of one catalog fetch.
///
/// Exactly one of three cases holds: a successful non-empty fetch, a
/// successful empty fetch, or a failed fetch carrying `error`. Consumers
/// treat any present `error` as a short-circuit; they never combine it with
/// the (then empty) catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogResult {
    /// Fetched items in source order.
    pub catalog: Vec<CatalogItem>,
    /// Human-readable failure description, if the fetch failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CatalogResult {
    /// A successful fetch.
    #[must_use]
    pub const fn ok(catalog: Vec<CatalogItem>) -> Self {
        Self {
            catalog,
            error: None,
        }
    }

    /// A failed fetch with an empty catalog.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            catalog: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Whether this result carries an error.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_sparse_item_deserializes_with_defaults() {
        let item: CatalogItem =
            serde_json::from_value(json!({ "id": 3, "service": "Laundry" })).expect("valid item");
        assert_eq!(item.id, 3);
        assert_eq!(item.service, "Laundry");
        assert!(item.variant.is_empty());
        assert!(item.rating.is_empty());
        assert_eq!(item.price, Decimal::ZERO);
        assert_eq!(item.customers, 0);
    }

    #[test]
    fn test_price_accepts_json_numbers() {
        let item: CatalogItem =
            serde_json::from_value(json!({ "id": 1, "price": 49.5, "market_price": 60 }))
                .expect("valid item");
        assert_eq!(item.price, Decimal::new(495, 1));
        assert_eq!(item.market_price, Decimal::from(60));
    }

    #[test]
    fn test_discounted_requires_strictly_greater_market_price() {
        let mut item = CatalogItem {
            price: Decimal::from(50),
            market_price: Decimal::from(60),
            ..CatalogItem::default()
        };
        assert!(item.discounted());

        item.market_price = Decimal::from(50);
        assert!(!item.discounted());

        item.market_price = Decimal::from(40);
        assert!(!item.discounted());
    }

    #[test]
    fn test_failed_result_has_empty_catalog() {
        let result = CatalogResult::failed("boom");
        assert!(result.is_failed());
        assert!(result.catalog.is_empty());
    }

    #[test]
    fn test_ok_result_serializes_without_error_key() {
        let result = CatalogResult::ok(vec![]);
        let value = serde_json::to_value(&result).expect("serializes");
        assert!(value.get("error").is_none());
    }
}
