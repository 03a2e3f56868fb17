//! Command-line value parsers

use combo_pricing::{DiscountInput, PricingError};
use rust_decimal::Decimal;
use shared::models::{ComboItem, Discount};
use std::str::FromStr;

/// `m1:2` → 2 × m1; a bare id means quantity 1
///
/// Quantities must be positive.
pub fn parse_item(raw: &str) -> Result<ComboItem, String> {
    let (id, quantity) = match raw.rsplit_once(':') {
        Some((id, qty)) => {
            let quantity = qty
                .trim()
                .parse::<i32>()
                .map_err(|_| format!("invalid quantity '{}' in '{}'", qty, raw))?;
            (id.trim(), quantity)
        }
        None => (raw.trim(), 1),
    };
    if id.is_empty() {
        return Err(format!("missing menu item id in '{}'", raw));
    }
    if quantity <= 0 {
        return Err(format!("quantity must be at least 1, got {} in '{}'", quantity, raw));
    }
    Ok(ComboItem::new(id, quantity))
}

/// `none`, `percentage:10` or `fixed:50`
pub fn parse_discount(raw: &str) -> Result<Discount, String> {
    let (kind, value) = match raw.split_once(':') {
        Some((kind, value)) => {
            let value = value
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid discount value '{}'", value))?;
            (kind, value)
        }
        None => (raw, 0.0),
    };
    Discount::try_from(DiscountInput::new(kind, value)).map_err(|e: PricingError| e.to_string())
}

/// Non-negative decimal amount
pub fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let value = Decimal::from_str(raw.trim()).map_err(|e| format!("invalid amount '{}': {}", raw, e))?;
    if value < Decimal::ZERO {
        return Err(format!("amount must not be negative, got {}", value));
    }
    Ok(value)
}
