//! Admin client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | API_BASE_URL | http://localhost:5000 | Backend REST base URL |
//! | API_TOKEN | (unset) | Bearer token |
//! | REQUEST_TIMEOUT_SECS | 30 | HTTP request timeout |
//! | CURRENCY_SYMBOL | ₹ | Currency symbol for price display |
//! | PRICE_TOLERANCE | 0 | Drift allowed before a combo is flagged |
//! | LOG_LEVEL | info | Log filter |
//! | LOG_DIR | (unset) | Directory for daily rolling log files |

use combo_pricing::{CurrencyFormat, MismatchPolicy};
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Backend base URL (e.g. "http://localhost:5000")
    pub base_url: String,
    /// Bearer token for authentication
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    pub currency_symbol: String,
    pub price_tolerance: Decimal,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}

impl AdminConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_secs: 30,
            currency_symbol: "₹".into(),
            price_tolerance: Decimal::ZERO,
            log_level: "info".into(),
            log_dir: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_empty("API_BASE_URL").unwrap_or(defaults.base_url),
            token: non_empty("API_TOKEN"),
            timeout_secs: non_empty("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
            currency_symbol: non_empty("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            price_tolerance: non_empty("PRICE_TOLERANCE")
                .and_then(|v| Decimal::from_str(v.trim()).ok())
                .map(|v| v.abs())
                .unwrap_or(defaults.price_tolerance),
            log_level: non_empty("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: non_empty("LOG_DIR"),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone())
    }

    pub fn mismatch_policy(&self) -> MismatchPolicy {
        MismatchPolicy::with_tolerance(self.price_tolerance)
    }
}
