//! Combo offer pricing
//!
//! - [`aggregator`]: original price of a set of menu items
//! - [`engine`]: discount application and price breakdowns
//! - [`presenter`]: display strings for summaries and warning badges
//! - [`mismatch`]: drift between saved combos and live menu prices
//! - [`selection`] / [`draft`]: combo editor working state

pub mod aggregator;
pub mod catalog;
pub mod draft;
pub mod engine;
pub mod error;
pub mod mismatch;
pub mod money;
pub mod presenter;
pub mod selection;

pub use aggregator::{CatalogTotal, aggregate, aggregate_catalog};
pub use catalog::Catalog;
pub use draft::ComboDraft;
pub use engine::{
    DiscountInput, PriceBreakdown, compute_final_price, price_breakdown, quote, validate_discount,
};
pub use error::PricingError;
pub use mismatch::{MismatchDetector, MismatchOutcome, MismatchPolicy};
pub use presenter::{CurrencyFormat, PriceSummary, summarize, warning_badge};
pub use selection::{SelectedItem, Selection};
