//! Shared types for the restaurant admin tooling
//!
//! Wire models (menu items, combo offers, discounts, price warnings),
//! status adapters, the unified error system and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{
    ComboItem, ComboOffer, ComboSubmission, Discount, MenuItem, MenuItemStatus, OrderStatus,
    PriceWarning, PriceWarningUpdate, StatusMapping,
};
pub use serde::{Deserialize, Serialize};
