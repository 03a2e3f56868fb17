//! Catalog index
//!
//! Read-only view of the menu items currently served by the catalog API,
//! keyed by id. Combos reference items by id and never mutate them.

use rust_decimal::Decimal;
use shared::models::MenuItem;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: HashMap<String, MenuItem>,
}

impl Catalog {
    pub fn new(items: impl IntoIterator<Item = MenuItem>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.id.clone(), item))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.get(id)
    }

    /// Current unit price of a menu item
    pub fn price_of(&self, id: &str) -> Option<Decimal> {
        self.items.get(id).map(|item| item.price)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<MenuItem> for Catalog {
    fn from_iter<T: IntoIterator<Item = MenuItem>>(iter: T) -> Self {
        Self::new(iter)
    }
}
