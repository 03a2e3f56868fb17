//! Data models
//!
//! Wire types shared by the pricing core and the REST client.
//! IDs are backend-issued strings; money is `rust_decimal::Decimal`,
//! serialized as JSON numbers.

pub mod combo;
pub mod menu_item;
pub mod status;

// Re-exports
pub use combo::*;
pub use menu_item::*;
pub use status::*;
