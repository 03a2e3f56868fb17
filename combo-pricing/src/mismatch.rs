//! Price-Mismatch Detector
//!
//! Recomputes a saved combo's original price from live menu prices and flags
//! drift against the stored snapshot. The detector never touches the combo's
//! stored `price` or `original_price`.

use crate::aggregator::aggregate_catalog;
use crate::catalog::Catalog;
use crate::error::PricingError;
use rust_decimal::Decimal;
use shared::models::{ComboOffer, PriceWarning};

/// Drift tolerance for flagging a combo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MismatchPolicy {
    /// Absolute drift allowed before a warning is raised (`0` flags any drift)
    pub tolerance: Decimal,
}

impl MismatchPolicy {
    pub fn with_tolerance(tolerance: Decimal) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    fn exceeds(&self, delta: Decimal) -> bool {
        delta.abs() > self.tolerance
    }
}

/// Result of checking one combo
#[derive(Debug, Clone, PartialEq)]
pub struct MismatchOutcome {
    pub combo_id: String,
    pub current_original_price: Decimal,
    /// `current − snapshot`
    pub delta: Decimal,
    /// `Some` when the combo should be flagged
    pub warning: Option<PriceWarning>,
}

impl MismatchOutcome {
    pub fn is_flagged(&self) -> bool {
        self.warning.is_some()
    }

    /// Whether persisting this outcome would change the combo's stored warning
    ///
    /// `checked_at` is ignored so re-running a check on an unchanged combo is
    /// a no-op.
    pub fn changes(&self, combo: &ComboOffer) -> bool {
        let stored = combo.price_warning.as_ref().filter(|w| w.has_warning);
        match (stored, &self.warning) {
            (None, None) => false,
            (Some(old), Some(new)) => !same_warning(old, new),
            _ => true,
        }
    }
}

/// Compare two warnings, ignoring when they were produced
pub fn same_warning(a: &PriceWarning, b: &PriceWarning) -> bool {
    a.has_warning == b.has_warning
        && a.current_original_price == b.current_original_price
        && a.snapshot_original_price == b.snapshot_original_price
        && a.delta == b.delta
        && a.missing_items == b.missing_items
}

#[derive(Debug, Clone, Default)]
pub struct MismatchDetector {
    policy: MismatchPolicy,
}

impl MismatchDetector {
    pub fn new(policy: MismatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MismatchPolicy {
        &self.policy
    }

    /// Check one combo against the live catalog
    ///
    /// Missing menu items always flag the combo; their lines contribute
    /// nothing to the recomputed price.
    pub fn check(
        &self,
        combo: &ComboOffer,
        catalog: &Catalog,
        checked_at: i64,
    ) -> Result<MismatchOutcome, PricingError> {
        let live = aggregate_catalog(&combo.items, catalog)?;
        let snapshot = combo.original_price;
        let delta = live.total - snapshot;

        let flagged = self.policy.exceeds(delta) || !live.is_complete();
        let warning = if flagged {
            tracing::warn!(
                combo_id = %combo.id,
                snapshot = %snapshot,
                current = %live.total,
                delta = %delta,
                missing = ?live.missing,
                "Combo original price drifted from menu prices"
            );
            Some(PriceWarning {
                has_warning: true,
                current_original_price: live.total,
                snapshot_original_price: snapshot,
                delta,
                missing_items: live.missing,
                checked_at: Some(checked_at),
            })
        } else {
            tracing::debug!(combo_id = %combo.id, delta = %delta, "Combo price in line with menu");
            None
        };

        Ok(MismatchOutcome {
            combo_id: combo.id.clone(),
            current_original_price: live.total,
            delta,
            warning,
        })
    }
}
