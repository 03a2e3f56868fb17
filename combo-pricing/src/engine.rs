//! Discount Engine
//!
//! Applies a combo's discount policy to its original price.
//!
//! - `none`: final = original
//! - `percentage v`: final = original × (1 − v/100), rounded to 2 dp
//! - `fixed v`: final = max(0, original − v)
//!
//! Inputs are validated at the form boundary ([`validate_discount`],
//! [`DiscountInput`]); the engine still clamps so that it never returns a
//! negative price or one above the original.

use crate::aggregator::aggregate;
use crate::error::PricingError;
use crate::money::{MAX_AMOUNT, decimal_from_f64, round_money};
use crate::selection::SelectedItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::Discount;

/// Final payable price for `original` under `discount`
pub fn compute_final_price(original: Decimal, discount: &Discount) -> Decimal {
    let original = original.max(Decimal::ZERO);
    if original.is_zero() {
        return Decimal::ZERO;
    }

    match discount {
        Discount::None => original,
        Discount::Percentage { value } => {
            let rate = (*value).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
            let multiplier = Decimal::ONE - rate / Decimal::ONE_HUNDRED;
            round_money(original * multiplier).clamp(Decimal::ZERO, original)
        }
        Discount::Fixed { value } => {
            let amount = (*value).max(Decimal::ZERO);
            (original - amount).max(Decimal::ZERO)
        }
    }
}

/// Reject discount values outside their allowed range
pub fn validate_discount(discount: &Discount) -> Result<(), PricingError> {
    match discount {
        Discount::None => Ok(()),
        Discount::Percentage { value } => {
            if *value < Decimal::ZERO || *value > Decimal::ONE_HUNDRED {
                return Err(PricingError::PercentageOutOfRange(*value));
            }
            Ok(())
        }
        Discount::Fixed { value } => {
            if *value < Decimal::ZERO || *value > MAX_AMOUNT {
                return Err(PricingError::FixedOutOfRange {
                    value: *value,
                    max: MAX_AMOUNT,
                });
            }
            Ok(())
        }
    }
}

/// Raw discount fields as entered in the editor form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountInput {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: f64,
}

impl DiscountInput {
    pub fn new(kind: impl Into<String>, value: f64) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }
}

impl TryFrom<DiscountInput> for Discount {
    type Error = PricingError;

    fn try_from(input: DiscountInput) -> Result<Self, Self::Error> {
        let kind = input.kind.trim().to_ascii_lowercase();
        if kind == "none" || kind.is_empty() {
            return Ok(Discount::None);
        }

        let value = decimal_from_f64(input.value).ok_or(PricingError::NonFiniteDiscount)?;
        let discount = match kind.as_str() {
            "percentage" => Discount::Percentage { value },
            "fixed" => Discount::Fixed { value },
            _ => return Err(PricingError::UnknownDiscountType(input.kind)),
        };
        validate_discount(&discount)?;
        Ok(discount)
    }
}

/// Original price, final price and the discount between them
///
/// `discount_amount` is always `original_price − final_price`; presenters
/// read it from here instead of recomputing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub original_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_amount: Decimal,
}

impl PriceBreakdown {
    /// Breakdown of a persisted combo's stored prices
    pub fn from_snapshot(original_price: Decimal, price: Decimal) -> Self {
        Self {
            original_price,
            final_price: price,
            discount_amount: original_price - price,
        }
    }

    pub fn has_discount(&self) -> bool {
        !self.discount_amount.is_zero()
    }
}

/// Apply `discount` to `original` and capture the result
pub fn price_breakdown(original: Decimal, discount: &Discount) -> PriceBreakdown {
    let original_price = original.max(Decimal::ZERO);
    let final_price = compute_final_price(original_price, discount);
    PriceBreakdown {
        original_price,
        final_price,
        discount_amount: original_price - final_price,
    }
}

/// Aggregate the selection, then apply the discount
pub fn quote(items: &[SelectedItem], discount: &Discount) -> Result<PriceBreakdown, PricingError> {
    let original = aggregate(items)?;
    Ok(price_breakdown(original, discount))
}
