//! Pricing validation errors
//!
//! Every variant is a recoverable input problem: the editor shows it next to
//! the offending field and blocks submission. Clamping (e.g. a fixed discount
//! above the original price) is not an error.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("quantity for item {item_id} must be between 1 and {max}, got {quantity}")]
    InvalidQuantity {
        item_id: String,
        quantity: i32,
        max: i32,
    },

    #[error("price for item {item_id} must be between 0 and {max}, got {price}")]
    InvalidPrice {
        item_id: String,
        price: Decimal,
        max: Decimal,
    },

    #[error("percentage discount must be between 0 and 100, got {0}")]
    PercentageOutOfRange(Decimal),

    #[error("fixed discount must be between 0 and {max}, got {value}")]
    FixedOutOfRange { value: Decimal, max: Decimal },

    #[error("discount value must be a finite number")]
    NonFiniteDiscount,

    #[error("unknown discount type '{0}'")]
    UnknownDiscountType(String),

    #[error("combo must contain at least one item")]
    EmptySelection,

    #[error("combo name is required")]
    MissingName,

    #[error("valid until ({until}) is before valid from ({from})")]
    InvalidValidity {
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    },

    #[error("menu item {0} is not available")]
    ItemUnavailable(String),

    #[error("menu item {0} not found")]
    UnknownMenuItem(String),
}

impl PricingError {
    /// Error code reported to the operator
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidQuantity { .. } => ErrorCode::ComboInvalidQuantity,
            Self::InvalidPrice { .. } => ErrorCode::MenuItemInvalidPrice,
            Self::PercentageOutOfRange(_)
            | Self::FixedOutOfRange { .. }
            | Self::NonFiniteDiscount
            | Self::UnknownDiscountType(_) => ErrorCode::ComboInvalidDiscount,
            Self::EmptySelection => ErrorCode::ComboEmpty,
            Self::MissingName => ErrorCode::RequiredField,
            Self::InvalidValidity { .. } => ErrorCode::ComboInvalidValidity,
            Self::ItemUnavailable(_) => ErrorCode::MenuItemUnavailable,
            Self::UnknownMenuItem(_) => ErrorCode::MenuItemNotFound,
        }
    }

    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidQuantity { .. } => "items.quantity",
            Self::InvalidPrice { .. } | Self::ItemUnavailable(_) | Self::UnknownMenuItem(_) => {
                "items"
            }
            Self::EmptySelection => "items",
            Self::PercentageOutOfRange(_)
            | Self::FixedOutOfRange { .. }
            | Self::NonFiniteDiscount => "discount.value",
            Self::UnknownDiscountType(_) => "discount.type",
            Self::MissingName => "name",
            Self::InvalidValidity { .. } => "validUntil",
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string()).with_detail("field", err.field());
        match &err {
            PricingError::InvalidQuantity { item_id, .. }
            | PricingError::InvalidPrice { item_id, .. } => app.with_detail("itemId", item_id.as_str()),
            PricingError::ItemUnavailable(id) | PricingError::UnknownMenuItem(id) => {
                app.with_detail("itemId", id.as_str())
            }
            _ => app,
        }
    }
}
