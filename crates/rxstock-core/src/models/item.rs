//! Pharmaceutical inventory item model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One parsed stock statement row.
///
/// Absent fields serialize as `null` rather than being skipped, so every item
/// carries the same set of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmaItem {
    /// Medicine name as printed in the statement.
    pub item_name: String,

    /// Opening stock quantity.
    pub opening_qty: Option<i64>,

    /// Purchased quantity.
    pub purchase_qty: Option<i64>,

    /// Free goods received with the purchase.
    pub purchase_free: Option<i64>,

    /// Sold quantity.
    pub sales_qty: Option<i64>,

    /// Sales value, rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::float_option", default)]
    pub sales_value: Option<Decimal>,

    /// Closing stock quantity.
    pub closing_qty: Option<i64>,

    /// Closing stock value, rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::float_option", default)]
    pub closing_value: Option<Decimal>,
}

impl PharmaItem {
    /// Create an item with only a name set.
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            opening_qty: None,
            purchase_qty: None,
            purchase_free: None,
            sales_qty: None,
            sales_value: None,
            closing_qty: None,
            closing_value: None,
        }
    }

    /// Key used for deduplication: trimmed and uppercased name.
    pub fn dedup_key(&self) -> String {
        self.item_name.trim().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_serializes_camel_case_with_nulls() {
        let mut item = PharmaItem::new("DOLO 650");
        item.opening_qty = Some(12);
        item.sales_value = Some(Decimal::from_str("150.50").unwrap());

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["itemName"], "DOLO 650");
        assert_eq!(json["openingQty"], 12);
        assert_eq!(json["salesValue"], 150.5);
        assert!(json["closingValue"].is_null());
        assert!(json.as_object().unwrap().contains_key("purchaseFree"));
    }

    #[test]
    fn test_dedup_key() {
        let item = PharmaItem::new("  Dolo 650 ");
        assert_eq!(item.dedup_key(), "DOLO 650");
    }
}
