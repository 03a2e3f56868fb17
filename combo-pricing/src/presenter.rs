//! Price-Summary Presenter
//!
//! Turns a [`PriceBreakdown`] into display strings for the combo editor
//! preview, the combo list and warning badges. The discount amount shown is
//! always the breakdown's `discount_amount`.

use crate::engine::PriceBreakdown;
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::{Discount, PriceWarning};
use std::fmt;

/// Currency display settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimals: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            decimals: 2,
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// `₹1234.50`, `-₹30.00`
    pub fn format(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        format!(
            "{}{}{:.prec$}",
            sign,
            self.symbol,
            rounded.abs(),
            prec = self.decimals as usize
        )
    }

    /// Amount with an explicit sign: `+₹50.00`, `-₹12.00`
    pub fn format_signed(&self, amount: Decimal) -> String {
        if amount > Decimal::ZERO {
            format!("+{}", self.format(amount))
        } else {
            self.format(amount)
        }
    }
}

/// Display triple for a combo price
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    /// Original price text
    pub original: String,
    /// Render the original price struck through
    pub original_struck: bool,
    /// `-10%` or `-₹50.00`; absent when no discount is active
    pub discount_label: Option<String>,
    /// Amount saved, straight from the breakdown
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_amount: Decimal,
    /// `-₹30.00`; absent when no discount is active
    pub discount_amount_text: Option<String>,
    /// Emphasized final price text
    pub final_price: String,
}

fn percent_label(value: Decimal) -> String {
    format!("-{}%", value.normalize())
}

/// Build the display summary from an engine breakdown
pub fn summarize(breakdown: &PriceBreakdown, discount: &Discount, fmt: &CurrencyFormat) -> PriceSummary {
    let active = discount.is_active();
    let amount = breakdown.discount_amount;

    let discount_label = match discount {
        Discount::None => None,
        Discount::Percentage { value } => Some(percent_label(*value)),
        Discount::Fixed { .. } => Some(format!("-{}", fmt.format(amount))),
    };

    PriceSummary {
        original: fmt.format(breakdown.original_price),
        original_struck: active,
        discount_label,
        discount_amount: amount,
        discount_amount_text: active.then(|| format!("-{}", fmt.format(amount))),
        final_price: fmt.format(breakdown.final_price),
    }
}

impl fmt::Display for PriceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.discount_label, &self.discount_amount_text) {
            (Some(label), Some(amount)) if label != amount => write!(
                f,
                "{} → {} ({}, {})",
                self.original, self.final_price, label, amount
            ),
            (Some(label), _) => write!(f, "{} → {} ({})", self.original, self.final_price, label),
            _ => write!(f, "{}", self.final_price),
        }
    }
}

/// Badge text for a flagged combo, `None` when there is nothing to show
pub fn warning_badge(warning: &PriceWarning, fmt: &CurrencyFormat) -> Option<String> {
    if !warning.has_warning {
        return None;
    }

    let mut badge = format!(
        "Menu prices changed: {} → {} ({})",
        fmt.format(warning.snapshot_original_price),
        fmt.format(warning.current_original_price),
        fmt.format_signed(warning.delta)
    );
    if !warning.missing_items.is_empty() {
        badge.push_str(&format!(
            "; missing items: {}",
            warning.missing_items.join(", ")
        ));
    }
    Some(badge)
}
