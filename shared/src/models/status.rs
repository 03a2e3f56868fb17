//! Status adapters
//!
//! The backend stores status enums in title case (`"In-progress"`), while the
//! dashboard filters and badges use lower kebab case (`"in-progress"`). Every
//! status enum goes through [`StatusMapping`] so the two spellings live in one
//! place.

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mapping between backend and UI spellings of a status enum
pub trait StatusMapping: Sized + Copy + 'static {
    /// Every variant, in display order
    const ALL: &'static [Self];

    /// Spelling used by the backend API
    fn backend(&self) -> &'static str;

    /// Spelling used by the dashboard
    fn ui(&self) -> &'static str;

    fn from_backend(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.backend() == value)
    }

    fn from_ui(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.ui() == value)
    }

    /// Accept either spelling
    fn parse_any(value: &str) -> Option<Self> {
        Self::from_backend(value).or_else(|| Self::from_ui(value))
    }
}

/// Menu item availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MenuItemStatus {
    #[default]
    #[serde(rename = "Available", alias = "available")]
    Available,
    #[serde(rename = "Unavailable", alias = "unavailable")]
    Unavailable,
    #[serde(rename = "Out-of-stock", alias = "out-of-stock")]
    OutOfStock,
}

impl MenuItemStatus {
    /// Whether the item can be added to a new combo
    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl StatusMapping for MenuItemStatus {
    const ALL: &'static [Self] = &[Self::Available, Self::Unavailable, Self::OutOfStock];

    fn backend(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Unavailable => "Unavailable",
            Self::OutOfStock => "Out-of-stock",
        }
    }

    fn ui(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::OutOfStock => "out-of-stock",
        }
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pending", alias = "pending")]
    Pending,
    #[serde(rename = "Confirmed", alias = "confirmed")]
    Confirmed,
    #[serde(rename = "In-progress", alias = "in-progress")]
    InProgress,
    #[serde(rename = "Ready", alias = "ready")]
    Ready,
    #[serde(rename = "Delivered", alias = "delivered")]
    Delivered,
    #[serde(rename = "Cancelled", alias = "cancelled")]
    Cancelled,
}

impl StatusMapping for OrderStatus {
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::Confirmed,
        Self::InProgress,
        Self::Ready,
        Self::Delivered,
        Self::Cancelled,
    ];

    fn backend(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::InProgress => "In-progress",
            Self::Ready => "Ready",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    fn ui(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in-progress",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MenuItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ui())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ui())
    }
}

impl FromStr for MenuItemStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_any(s).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::MenuItemInvalidStatus,
                format!("unknown menu item status '{}'", s),
            )
            .with_detail("value", s)
        })
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_any(s).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::OrderInvalidStatus,
                format!("unknown order status '{}'", s),
            )
            .with_detail("value", s)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_mapping() {
        assert_eq!(OrderStatus::InProgress.backend(), "In-progress");
        assert_eq!(OrderStatus::InProgress.ui(), "in-progress");
        assert_eq!(
            OrderStatus::from_ui("in-progress"),
            Some(OrderStatus::InProgress)
        );
        assert_eq!(
            OrderStatus::from_backend("In-progress"),
            Some(OrderStatus::InProgress)
        );
        // Spellings do not cross over
        assert_eq!(OrderStatus::from_backend("in-progress"), None);
    }

    #[test]
    fn test_every_variant_maps_both_ways() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_backend(status.backend()), Some(*status));
            assert_eq!(OrderStatus::from_ui(status.ui()), Some(*status));
        }
        for status in MenuItemStatus::ALL {
            assert_eq!(MenuItemStatus::from_backend(status.backend()), Some(*status));
            assert_eq!(MenuItemStatus::from_ui(status.ui()), Some(*status));
        }
    }

    #[test]
    fn test_serde_uses_backend_spelling() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"In-progress\"");

        let parsed: OrderStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, OrderStatus::InProgress);

        let parsed: MenuItemStatus = serde_json::from_str("\"Out-of-stock\"").unwrap();
        assert_eq!(parsed, MenuItemStatus::OutOfStock);
    }

    #[test]
    fn test_from_str_errors_carry_code() {
        let err = "shipped".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidStatus);
        assert_eq!(err.detail("value").unwrap(), "shipped");

        let err = "gone".parse::<MenuItemStatus>().unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidStatus);

        assert_eq!("Ready".parse::<OrderStatus>().unwrap(), OrderStatus::Ready);
    }

    #[test]
    fn test_predicates() {
        assert!(MenuItemStatus::Available.is_selectable());
        assert!(!MenuItemStatus::OutOfStock.is_selectable());
        assert_eq!(OrderStatus::InProgress.to_string(), "in-progress");
    }
}
