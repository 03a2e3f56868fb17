//! Money helpers
//!
//! All arithmetic is done on `Decimal`. Rounding to currency precision is
//! applied only where a price is finalized or displayed, never while summing.

use crate::error::PricingError;
use rust_decimal::prelude::*;

/// Currency precision (2 decimal places)
pub const DECIMAL_PLACES: u32 = 2;

/// Maximum accepted unit price or fixed discount (1,000,000 currency units)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Maximum accepted quantity per combo line
pub const MAX_QUANTITY: i32 = 999;

/// Quantity of one combo line must lie in `1..=MAX_QUANTITY`
pub(crate) fn check_quantity(item_id: &str, quantity: i32) -> Result<(), PricingError> {
    if quantity <= 0 || quantity > MAX_QUANTITY {
        return Err(PricingError::InvalidQuantity {
            item_id: item_id.to_string(),
            quantity,
            max: MAX_QUANTITY,
        });
    }
    Ok(())
}

/// Round to currency precision, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a raw form number to `Decimal`
///
/// Returns `None` for NaN and infinities.
#[inline]
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}
