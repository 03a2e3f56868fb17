//! Combo editor selection
//!
//! Working list of menu items picked for a combo. Entries are unique by item
//! id: selecting an item that is already present bumps its quantity.

use crate::catalog::Catalog;
use crate::error::PricingError;
use crate::money::check_quantity;
use rust_decimal::Decimal;
use shared::models::{ComboItem, ComboOffer, MenuItem};

/// A menu item with the quantity chosen for the combo
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItem {
    pub item: MenuItem,
    pub quantity: i32,
}

impl SelectedItem {
    pub fn new(item: MenuItem, quantity: i32) -> Self {
        Self { item, quantity }
    }

    /// `price × quantity`, unrounded
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// Insertion-ordered, duplicate-free list of selected items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    items: Vec<SelectedItem>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the selection of a persisted combo using live catalog entries
    ///
    /// Items no longer selectable for new combos are still loaded; an item
    /// missing from the catalog is an error.
    pub fn from_combo(combo: &ComboOffer, catalog: &Catalog) -> Result<Self, PricingError> {
        let mut selection = Self::new();
        for line in &combo.items {
            check_quantity(&line.menu_item, line.quantity)?;
            let item = catalog
                .get(&line.menu_item)
                .ok_or_else(|| PricingError::UnknownMenuItem(line.menu_item.clone()))?;
            match selection.position(&item.id) {
                Some(idx) => {
                    let merged = selection.items[idx].quantity + line.quantity;
                    check_quantity(&item.id, merged)?;
                    selection.items[idx].quantity = merged;
                }
                None => selection
                    .items
                    .push(SelectedItem::new(item.clone(), line.quantity)),
            }
        }
        Ok(selection)
    }

    fn position(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|s| s.item.id == item_id)
    }

    /// Add an item, or increment it if already selected
    ///
    /// Returns the item's quantity after the change.
    pub fn select(&mut self, item: &MenuItem) -> Result<i32, PricingError> {
        if !item.status.is_selectable() {
            return Err(PricingError::ItemUnavailable(item.id.clone()));
        }
        match self.position(&item.id) {
            Some(idx) => {
                let quantity = self.items[idx].quantity + 1;
                check_quantity(&item.id, quantity)?;
                self.items[idx].quantity = quantity;
                Ok(quantity)
            }
            None => {
                self.items.push(SelectedItem::new(item.clone(), 1));
                Ok(1)
            }
        }
    }

    /// Add `quantity` units of an item, merging with an existing entry
    ///
    /// The added quantity is checked on its own before merging, so a
    /// negative line cannot shrink an earlier one.
    pub fn add(&mut self, item: &MenuItem, quantity: i32) -> Result<i32, PricingError> {
        check_quantity(&item.id, quantity)?;
        if !item.status.is_selectable() {
            return Err(PricingError::ItemUnavailable(item.id.clone()));
        }
        let merged = self.quantity_of(&item.id) + quantity;
        check_quantity(&item.id, merged)?;
        match self.position(&item.id) {
            Some(idx) => self.items[idx].quantity = merged,
            None => self.items.push(SelectedItem::new(item.clone(), quantity)),
        }
        Ok(merged)
    }

    /// Set the quantity of an already selected item
    pub fn set_quantity(&mut self, item_id: &str, quantity: i32) -> Result<(), PricingError> {
        check_quantity(item_id, quantity)?;
        let idx = self
            .position(item_id)
            .ok_or_else(|| PricingError::UnknownMenuItem(item_id.to_string()))?;
        self.items[idx].quantity = quantity;
        Ok(())
    }

    /// Decrement an item, removing it when it reaches zero
    ///
    /// Returns the remaining quantity, or `None` if the item was not selected.
    pub fn decrement(&mut self, item_id: &str) -> Option<i32> {
        let idx = self.position(item_id)?;
        let remaining = self.items[idx].quantity - 1;
        if remaining <= 0 {
            self.items.remove(idx);
            Some(0)
        } else {
            self.items[idx].quantity = remaining;
            Some(remaining)
        }
    }

    pub fn remove(&mut self, item_id: &str) -> Option<SelectedItem> {
        let idx = self.position(item_id)?;
        Some(self.items.remove(idx))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace each entry's menu item with the catalog's current version
    ///
    /// Returns ids that are no longer in the catalog; those entries keep their
    /// last known price.
    pub fn refresh_prices(&mut self, catalog: &Catalog) -> Vec<String> {
        let mut missing = Vec::new();
        for selected in &mut self.items {
            match catalog.get(&selected.item.id) {
                Some(current) => selected.item = current.clone(),
                None => missing.push(selected.item.id.clone()),
            }
        }
        missing
    }

    pub fn quantity_of(&self, item_id: &str) -> i32 {
        self.position(item_id)
            .map(|idx| self.items[idx].quantity)
            .unwrap_or(0)
    }

    pub fn items(&self) -> &[SelectedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item references for the submission payload
    pub fn to_combo_items(&self) -> Vec<ComboItem> {
        self.items
            .iter()
            .map(|s| ComboItem::new(s.item.id.clone(), s.quantity))
            .collect()
    }
}
