//! Unified error system
//!
//! | Range | Domain |
//! |-------|--------|
//! | 0xxx | general |
//! | 1xxx | authentication |
//! | 2xxx | permission |
//! | 4xxx | orders |
//! | 6xxx | catalog |
//! | 7xxx | combo offers |
//! | 9xxx | system |
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ComboEmpty).with_detail("field", "items");
//! let envelope = ApiResponse::<()>::error(&err);
//! assert_eq!(envelope.code, Some(7002));
//! assert_eq!(envelope.to_error().unwrap().detail("field").unwrap(), "items");
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
