//! Numeric error codes
//!
//! Codes travel in the backend envelope (`{"code": 7001, ...}`) and are
//! grouped by thousands of the domain they belong to.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // 0xxx general
    Success = 0,
    Unknown = 1,
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    InvalidFormat = 6,
    RequiredField = 7,
    ValueOutOfRange = 8,

    // 1xxx / 2xxx access
    NotAuthenticated = 1001,
    PermissionDenied = 2001,

    // 4xxx orders
    OrderInvalidStatus = 4002,

    // 6xxx catalog
    MenuItemNotFound = 6001,
    /// Unit price negative or above the accepted maximum
    MenuItemInvalidPrice = 6002,
    /// Item is unavailable or out of stock and cannot join a new combo
    MenuItemUnavailable = 6003,
    MenuItemInvalidStatus = 6004,

    // 7xxx combos
    ComboNotFound = 7001,
    ComboEmpty = 7002,
    ComboInvalidQuantity = 7003,
    ComboInvalidDiscount = 7004,
    ComboInvalidValidity = 7005,

    // 9xxx system
    InternalError = 9001,
    DatabaseError = 9002,
    NetworkError = 9003,
    TimeoutError = 9004,
    ConfigError = 9005,
}

impl ErrorCode {
    /// Every code, in numeric order
    pub const ALL: &'static [ErrorCode] = &[
        Self::Success,
        Self::Unknown,
        Self::ValidationFailed,
        Self::NotFound,
        Self::AlreadyExists,
        Self::InvalidFormat,
        Self::RequiredField,
        Self::ValueOutOfRange,
        Self::NotAuthenticated,
        Self::PermissionDenied,
        Self::OrderInvalidStatus,
        Self::MenuItemNotFound,
        Self::MenuItemInvalidPrice,
        Self::MenuItemUnavailable,
        Self::MenuItemInvalidStatus,
        Self::ComboNotFound,
        Self::ComboEmpty,
        Self::ComboInvalidQuantity,
        Self::ComboInvalidDiscount,
        Self::ComboInvalidValidity,
        Self::InternalError,
        Self::DatabaseError,
        Self::NetworkError,
        Self::TimeoutError,
        Self::ConfigError,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Default operator-facing message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Unknown => "Something went wrong",
            Self::ValidationFailed => "Please check the highlighted fields",
            Self::NotFound => "Not found",
            Self::AlreadyExists => "Already exists",
            Self::InvalidFormat => "Unexpected response format",
            Self::RequiredField => "This field is required",
            Self::ValueOutOfRange => "Value is out of range",
            Self::NotAuthenticated => "Please sign in again",
            Self::PermissionDenied => "You are not allowed to do this",
            Self::OrderInvalidStatus => "Unknown order status",
            Self::MenuItemNotFound => "Menu item not found",
            Self::MenuItemInvalidPrice => "Menu item price is invalid",
            Self::MenuItemUnavailable => "Menu item is not available",
            Self::MenuItemInvalidStatus => "Unknown menu item status",
            Self::ComboNotFound => "Combo offer not found",
            Self::ComboEmpty => "Add at least one item to the combo",
            Self::ComboInvalidQuantity => "Quantity must be a positive whole number",
            Self::ComboInvalidDiscount => "Discount value is out of range",
            Self::ComboInvalidValidity => "Valid until must not be before valid from",
            Self::InternalError => "Server error",
            Self::DatabaseError => "Could not save changes",
            Self::NetworkError => "Cannot reach the server",
            Self::TimeoutError => "The server took too long to respond",
            Self::ConfigError => "Client is misconfigured",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A numeric code with no matching [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}
