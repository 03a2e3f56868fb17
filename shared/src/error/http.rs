//! Error code ↔ HTTP status

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Status the backend answers with for this code
    pub fn http_status(&self) -> StatusCode {
        use ErrorCode::*;
        match self {
            Success => StatusCode::OK,
            NotFound | MenuItemNotFound | ComboNotFound => StatusCode::NOT_FOUND,
            AlreadyExists => StatusCode::CONFLICT,
            NotAuthenticated => StatusCode::UNAUTHORIZED,
            PermissionDenied => StatusCode::FORBIDDEN,
            NetworkError | TimeoutError => StatusCode::SERVICE_UNAVAILABLE,
            InternalError | DatabaseError | ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Best-effort code for an error response without an envelope
    pub fn from_http_status(status: StatusCode) -> Self {
        match status.as_u16() {
            200..=299 => Self::Success,
            400 | 422 => Self::ValidationFailed,
            401 => Self::NotAuthenticated,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            409 => Self::AlreadyExists,
            408 | 504 => Self::TimeoutError,
            502 | 503 => Self::NetworkError,
            500..=599 => Self::InternalError,
            _ => Self::Unknown,
        }
    }
}
