//! Menu Item Model

use super::status::MenuItemStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item as served by the catalog API
///
/// Owned by the catalog; combos only reference it by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Unit price in currency units
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub status: MenuItemStatus,
    /// Category reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            status: MenuItemStatus::Available,
            category: None,
        }
    }

    pub fn with_status(mut self, status: MenuItemStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{"_id":"m1","name":"Paneer Tikka","price":120.5,"status":"Available","category":"c1"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "m1");
        assert_eq!(item.price, Decimal::new(1205, 1));
        assert_eq!(item.status, MenuItemStatus::Available);
        assert_eq!(item.category.as_deref(), Some("c1"));
    }

    #[test]
    fn test_status_defaults_to_available() {
        let json = r#"{"id":"m2","name":"Lassi","price":60}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, MenuItemStatus::Available);
        assert_eq!(item.price, Decimal::from(60));
    }

    #[test]
    fn test_serialize_price_as_number() {
        let item = MenuItem::new("m3", "Naan", Decimal::new(4050, 2));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["price"], 40.5);
        assert!(json.get("category").is_none());
    }
}
