//! Client error types

use combo_pricing::PricingError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend reported an error (status code or error envelope)
    #[error("API error {}: {}", .0.code, .0.message)]
    Api(AppError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Combo failed local pricing validation
    #[error("Validation error: {0}")]
    Pricing(#[from] PricingError),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Unified error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::Api(e) => e.code,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidFormat,
            Self::Pricing(e) => e.code(),
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::NotFound | ErrorCode::ComboNotFound | ErrorCode::MenuItemNotFound
        )
    }
}

impl From<AppError> for ClientError {
    fn from(err: AppError) -> Self {
        Self::Api(err)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let api: ClientError = AppError::new(ErrorCode::ComboNotFound).into();
        assert_eq!(api.code(), ErrorCode::ComboNotFound);
        assert!(api.is_not_found());

        let pricing: ClientError = PricingError::EmptySelection.into();
        assert_eq!(pricing.code(), ErrorCode::ComboEmpty);
        assert!(!pricing.is_not_found());

        let bad = ClientError::InvalidResponse("truncated".into());
        assert_eq!(bad.code(), ErrorCode::InvalidFormat);
        assert_eq!(bad.to_string(), "Invalid response: truncated");
    }

    #[test]
    fn test_api_error_display() {
        let err = ClientError::Api(AppError::with_message(ErrorCode::NotAuthenticated, "login first"));
        assert_eq!(err.to_string(), "API error E1001: login first");
    }
}
