//! HTTP client for the video backend.

mod client;
mod error;

pub use client::{ApiClient, INVALID_LOGIN_MESSAGE, UPLOAD_FORBIDDEN_MESSAGE};
pub use error::{ApiError, ApiErrorKind, ApiResult, SESSION_EXPIRED_MESSAGE};
