//! Combo Offer Model
//!
//! A combo bundles several menu items at a (usually discounted) price.
//! `original_price` and `price` are snapshots taken when the combo was last
//! saved; they are not recomputed when menu prices move.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Discount policy attached to a combo
///
/// Wire shape: `{"type": "none"}`, `{"type": "percentage", "value": 10}`,
/// `{"type": "fixed", "value": 50}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Discount {
    #[default]
    None,
    /// Percentage off, `value` in `[0, 100]`
    Percentage {
        #[serde(with = "rust_decimal::serde::float")]
        value: Decimal,
    },
    /// Fixed amount off in currency units, `value >= 0`
    Fixed {
        #[serde(with = "rust_decimal::serde::float")]
        value: Decimal,
    },
}

impl Discount {
    pub fn percentage(value: Decimal) -> Self {
        Self::Percentage { value }
    }

    pub fn fixed(value: Decimal) -> Self {
        Self::Fixed { value }
    }

    /// Whether a discount policy is set (any type other than `none`)
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Menu item reference inside a persisted combo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboItem {
    /// Menu item ID
    pub menu_item: String,
    pub quantity: i32,
}

impl ComboItem {
    pub fn new(menu_item: impl Into<String>, quantity: i32) -> Self {
        Self {
            menu_item: menu_item.into(),
            quantity,
        }
    }
}

/// Result of the last price recheck for a combo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceWarning {
    pub has_warning: bool,
    /// Original price recomputed from live menu prices
    #[serde(with = "rust_decimal::serde::float")]
    pub current_original_price: Decimal,
    /// Original price stored on the combo
    #[serde(with = "rust_decimal::serde::float")]
    pub snapshot_original_price: Decimal,
    /// `current - snapshot`
    #[serde(with = "rust_decimal::serde::float")]
    pub delta: Decimal,
    /// Referenced menu items no longer present in the catalog
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_items: Vec<String>,
    /// Check time (Unix millis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_at: Option<i64>,
}

/// Persisted combo offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboOffer {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub items: Vec<ComboItem>,
    #[serde(default)]
    pub discount: Discount,
    /// Sum of item prices at save time
    #[serde(with = "rust_decimal::serde::float")]
    pub original_price: Decimal,
    /// Final payable price at save time
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_warning: Option<PriceWarning>,
}

fn default_true() -> bool {
    true
}

impl ComboOffer {
    /// Whether the last recheck flagged this combo
    pub fn has_price_warning(&self) -> bool {
        self.price_warning.as_ref().is_some_and(|w| w.has_warning)
    }
}

/// Create/update payload for a combo
///
/// `priceWarning` is always sent; saving a combo re-snapshots its prices, so
/// the payload carries `null` to clear any outstanding warning in the same
/// write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboSubmission {
    pub name: String,
    pub description: String,
    pub items: Vec<ComboItem>,
    pub discount: Discount,
    #[serde(with = "rust_decimal::serde::float")]
    pub original_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub is_active: bool,
    #[serde(default)]
    pub price_warning: Option<PriceWarning>,
}

/// Payload persisting a recheck result (`null` clears the warning)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceWarningUpdate {
    pub price_warning: Option<PriceWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_wire_shape() {
        let d = Discount::percentage(Decimal::from(10));
        let json = serde_json::to_value(d).unwrap();
        assert_eq!(json["type"], "percentage");
        assert_eq!(json["value"], 10.0);

        let none = serde_json::to_value(Discount::None).unwrap();
        assert_eq!(none, serde_json::json!({"type": "none"}));

        let fixed: Discount = serde_json::from_str(r#"{"type":"fixed","value":50}"#).unwrap();
        assert_eq!(fixed, Discount::fixed(Decimal::from(50)));

        assert!(serde_json::from_str::<Discount>(r#"{"type":"bogo"}"#).is_err());
    }

    #[test]
    fn test_discount_helpers() {
        assert!(!Discount::None.is_active());
        assert!(Discount::fixed(Decimal::ZERO).is_active());
    }

    #[test]
    fn test_combo_deserialize() {
        let json = r#"{
            "_id": "c1",
            "name": "Family Meal",
            "items": [{"menuItem": "m1", "quantity": 2}, {"menuItem": "m2", "quantity": 1}],
            "discount": {"type": "percentage", "value": 10},
            "originalPrice": 300,
            "price": 270,
            "validFrom": "2026-01-01T00:00:00Z",
            "priceWarning": {
                "hasWarning": true,
                "currentOriginalPrice": 330,
                "snapshotOriginalPrice": 300,
                "delta": 30
            }
        }"#;
        let combo: ComboOffer = serde_json::from_str(json).unwrap();
        assert_eq!(combo.id, "c1");
        assert_eq!(combo.items[0], ComboItem::new("m1", 2));
        assert_eq!(combo.price, Decimal::from(270));
        assert!(combo.is_active);
        assert!(combo.description.is_empty());
        assert!(combo.has_price_warning());
        let warning = combo.price_warning.unwrap();
        assert_eq!(warning.delta, Decimal::from(30));
        assert!(warning.missing_items.is_empty());
    }

    #[test]
    fn test_price_warning_flag() {
        let warning = PriceWarning {
            has_warning: false,
            current_original_price: Decimal::from(100),
            snapshot_original_price: Decimal::from(100),
            delta: Decimal::ZERO,
            missing_items: vec![],
            checked_at: Some(1),
        };
        let combo = ComboOffer {
            id: "c1".into(),
            name: "Lunch".into(),
            description: String::new(),
            items: vec![ComboItem::new("m1", 1)],
            discount: Discount::None,
            original_price: Decimal::from(100),
            price: Decimal::from(100),
            valid_from: None,
            valid_until: None,
            is_active: true,
            price_warning: Some(warning.clone()),
        };
        assert!(!combo.has_price_warning());

        let flagged = ComboOffer {
            price_warning: Some(PriceWarning {
                has_warning: true,
                ..warning
            }),
            ..combo
        };
        assert!(flagged.has_price_warning());
    }

    #[test]
    fn test_warning_update_null_clears() {
        let update = PriceWarningUpdate { price_warning: None };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"priceWarning":null}"#);
    }

    #[test]
    fn test_submission_always_carries_warning_field() {
        let submission = ComboSubmission {
            name: "Lunch".into(),
            description: String::new(),
            items: vec![ComboItem::new("m1", 1)],
            discount: Discount::None,
            original_price: Decimal::from(100),
            price: Decimal::from(100),
            valid_from: None,
            valid_until: None,
            is_active: true,
            price_warning: None,
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json["priceWarning"].is_null());
        assert!(json.as_object().unwrap().contains_key("priceWarning"));

        let legacy: ComboSubmission = serde_json::from_str(
            r#"{"name":"Lunch","description":"","items":[],"discount":{"type":"none"},
                "originalPrice":0,"price":0,"validFrom":null,"validUntil":null,"isActive":true}"#,
        )
        .unwrap();
        assert!(legacy.price_warning.is_none());
    }
}
