//! Combo editor draft
//!
//! Holds the editor's state for a combo being created or edited. Prices are
//! never cached: [`ComboDraft::preview`] recomputes the breakdown from the
//! current selection and discount on every call.

use crate::catalog::Catalog;
use crate::engine::{PriceBreakdown, quote, validate_discount};
use crate::error::PricingError;
use crate::selection::Selection;
use chrono::{DateTime, Utc};
use shared::models::{ComboOffer, ComboSubmission, Discount};

#[derive(Debug, Clone, PartialEq)]
pub struct ComboDraft {
    pub name: String,
    pub description: String,
    pub selection: Selection,
    pub discount: Discount,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl Default for ComboDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            selection: Selection::new(),
            discount: Discount::None,
            valid_from: None,
            valid_until: None,
            is_active: true,
        }
    }
}

impl ComboDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load a saved combo for editing, with item prices from the live catalog
    pub fn from_combo(combo: &ComboOffer, catalog: &Catalog) -> Result<Self, PricingError> {
        Ok(Self {
            name: combo.name.clone(),
            description: combo.description.clone(),
            selection: Selection::from_combo(combo, catalog)?,
            discount: combo.discount,
            valid_from: combo.valid_from,
            valid_until: combo.valid_until,
            is_active: combo.is_active,
        })
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = discount;
        self
    }

    /// Live price preview for the current state
    pub fn preview(&self) -> Result<PriceBreakdown, PricingError> {
        quote(self.selection.items(), &self.discount)
    }

    /// All problems blocking submission, in form order
    pub fn errors(&self) -> Vec<PricingError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(PricingError::MissingName);
        }
        if self.selection.is_empty() {
            errors.push(PricingError::EmptySelection);
        } else if let Err(e) = self.preview() {
            errors.push(e);
        }
        if let Err(e) = validate_discount(&self.discount) {
            errors.push(e);
        }
        if let (Some(from), Some(until)) = (self.valid_from, self.valid_until) {
            if until < from {
                errors.push(PricingError::InvalidValidity { from, until });
            }
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Validate and build the create/update payload
    ///
    /// `original_price` and `price` are computed here from the selection's
    /// current prices.
    pub fn to_submission(&self) -> Result<ComboSubmission, PricingError> {
        if let Some(first) = self.errors().into_iter().next() {
            return Err(first);
        }

        let breakdown = self.preview()?;
        Ok(ComboSubmission {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            items: self.selection.to_combo_items(),
            discount: self.discount,
            original_price: breakdown.original_price,
            price: breakdown.final_price,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            is_active: self.is_active,
            price_warning: None,
        })
    }
}
