//! Admin client for combo offers
//!
//! REST access to the menu catalog and combo store, plus the services the
//! `combo-admin` binary drives: editing combos with server-side prices
//! computed from live menu prices, and the batch price recheck.

pub mod api;
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod recheck;
pub mod service;

#[cfg(test)]
mod testing;

pub use api::{CatalogSource, ComboStore};
pub use config::AdminConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use recheck::{PriceRecheckService, RecheckFailure, RecheckReport};
pub use service::ComboService;
