//! Structured API errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message shown when the backend rejects the stored credentials.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

/// Categories of client errors, so screens can tell a dead network apart
/// from a server rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Transport failure: connection refused, DNS, timeout
    Network,
    /// HTTP 401; the session has been cleared
    Unauthorized,
    /// Any other non-2xx status
    HttpStatus,
    /// Response body did not match the expected shape
    Parse,
    /// Local form validation failed; nothing was sent
    Validation,
    /// Token payload could not be decoded
    Decode,
    /// Local role gate refused the operation; nothing was sent
    Forbidden,
    /// No token stored for an operation that needs one
    NotAuthenticated,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Unauthorized => write!(f, "unauthorized"),
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Parse => write!(f, "parse"),
            ApiErrorKind::Validation => write!(f, "validation"),
            ApiErrorKind::Decode => write!(f, "decode"),
            ApiErrorKind::Forbidden => write!(f, "forbidden"),
            ApiErrorKind::NotAuthenticated => write!(f, "not_authenticated"),
        }
    }
}

/// Error returned by the API client and the token reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Forbidden, message)
    }

    pub fn not_authenticated() -> Self {
        Self::new(
            ApiErrorKind::NotAuthenticated,
            "No authentication token found. Please log in.",
        )
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Parse, message)
    }

    /// Creates the error for a 401 response.
    pub fn unauthorized(body: &str) -> Self {
        let error = Self::new(ApiErrorKind::Unauthorized, SESSION_EXPIRED_MESSAGE);
        match extract_message(body) {
            Some(msg) => error.with_details(msg),
            None if !body.trim().is_empty() => error.with_details(body),
            None => error,
        }
    }

    /// Creates an HTTP status error, pulling a cleaner message out of a
    /// JSON body when the backend sends one.
    pub fn http_status(status: u16, body: &str) -> Self {
        if let Some(msg) = extract_message(body) {
            return Self {
                kind: ApiErrorKind::HttpStatus,
                message: format!("HTTP {status}: {msg}"),
                details: Some(body.to_string()),
            };
        }
        Self {
            kind: ApiErrorKind::HttpStatus,
            message: format!("HTTP {status}"),
            details: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    /// Classifies a transport-level reqwest error.
    pub fn transport(err: &reqwest::Error) -> Self {
        let kind = if err.is_decode() {
            ApiErrorKind::Parse
        } else {
            ApiErrorKind::Network
        };
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else if err.is_connect() {
            "Could not reach the server".to_string()
        } else if err.is_decode() {
            "Unexpected response from the server".to_string()
        } else {
            "Network request failed".to_string()
        };
        Self::new(kind, message).with_details(err.to_string())
    }

    pub fn is_network(&self) -> bool {
        self.kind == ApiErrorKind::Network
    }

    /// True for errors raised before any request left the client.
    pub fn is_local(&self) -> bool {
        matches!(
            self.kind,
            ApiErrorKind::Validation
                | ApiErrorKind::Decode
                | ApiErrorKind::Forbidden
                | ApiErrorKind::NotAuthenticated
        )
    }
}

/// Pulls `error.message`, `message` or `error` (string) out of a JSON body.
fn extract_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    let msg = json
        .get("error")
        .and_then(|e| e.get("message"))
        .or_else(|| json.get("message"))
        .or_else(|| json.get("error"))?
        .as_str()?
        .trim();
    (!msg.is_empty()).then(|| msg.to_string())
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
