//! `AppError` and the backend response envelope

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Coded error shown to the operator
///
/// `details` carries structured context, most often the `field` a form error
/// belongs to.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref()?.get(key)
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource))
            .with_detail("resource", resource)
    }
}

/// Backend response envelope
///
/// `{"code": 0, "message": "OK", "data": ...}` on success,
/// `{"code": 7001, "message": "...", "details": {...}}` on failure.
/// A missing `code` is treated as success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.code, None | Some(0))
    }

    /// The envelope's failure as an [`AppError`], if it reports one
    ///
    /// Codes this client does not know become [`ErrorCode::Unknown`], with
    /// the raw number kept under the `code` detail.
    pub fn to_error(&self) -> Option<AppError> {
        let raw = self.code.filter(|c| *c != 0)?;
        let mut err = match ErrorCode::try_from(raw) {
            Ok(code) if self.message.is_empty() => AppError::new(code),
            Ok(code) => AppError::with_message(code, self.message.clone()),
            Err(_) => AppError::with_message(ErrorCode::Unknown, self.message.clone())
                .with_detail("code", raw),
        };
        for (key, value) in self.details.iter().flatten() {
            err = err.with_detail(key.clone(), value.clone());
        }
        Some(err)
    }
}

impl ApiResponse<()> {
    pub fn error(err: &AppError) -> Self {
        err.clone().into()
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message,
            data: None,
            details: err.details,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
