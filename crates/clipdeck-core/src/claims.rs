//! Unverified JWT claims reader.
//!
//! Decodes the payload segment of a bearer token to pick the screen tree.
//! The signature is never checked here: the backend authorizes every
//! request, so a forged claim only changes which screens render.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::api::{ApiError, ApiResult};

/// Role derived from the token, the only signal used for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Claims clipdeck reads from the token payload. Unknown claims are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, rename = "isAdmin", alias = "is_admin")]
    pub is_admin: Option<bool>,
    /// Expiry, seconds since the epoch.
    #[serde(default)]
    pub exp: Option<u64>,
}

impl Claims {
    /// Maps the claims to a role.
    ///
    /// `role` wins when present; `isAdmin` is the fallback. Returns `None`
    /// when neither claim exists.
    pub fn role(&self, admin_marker: &str) -> Option<Role> {
        if let Some(role) = self.role.as_deref() {
            return Some(if role_matches(role, admin_marker) {
                Role::Admin
            } else {
                Role::User
            });
        }
        self.is_admin
            .map(|is_admin| if is_admin { Role::Admin } else { Role::User })
    }

    pub fn is_expired_at(&self, now_secs: u64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }

    /// Display name: `username`, then `sub`.
    pub fn display_name(&self) -> Option<&str> {
        self.username
            .as_deref()
            .or(self.sub.as_deref())
            .filter(|name| !name.trim().is_empty())
    }
}

fn role_matches(role: &str, admin_marker: &str) -> bool {
    let normalize = |value: &str| {
        let value = value.trim();
        let stripped = value
            .get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("role_"))
            .map_or(value, |_| &value[5..]);
        stripped.to_ascii_lowercase()
    };
    normalize(role) == normalize(admin_marker)
}

/// Decodes the payload of a three-segment token.
///
/// # Errors
/// Returns a `Decode` error for anything that is not a readable JWT payload.
pub fn decode_claims(token: &str) -> ApiResult<Claims> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(ApiError::decode("Token is not a JWT"));
    }

    let payload = parts[1].trim_end_matches('=');
    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ApiError::decode("Token payload is not base64url").with_details(e.to_string()))?;
    serde_json::from_slice(&decoded)
        .map_err(|e| ApiError::decode("Token payload is not valid JSON").with_details(e.to_string()))
}

/// Outcome of reading a token for navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    Valid { role: Role, claims: Claims },
    Expired,
}

/// Decodes `token` and resolves its role at `now_secs`.
///
/// # Errors
/// Returns a `Decode` error when the payload is unreadable or carries no
/// role signal.
pub fn inspect_token_at(token: &str, admin_marker: &str, now_secs: u64) -> ApiResult<TokenStatus> {
    let claims = decode_claims(token)?;
    if claims.is_expired_at(now_secs) {
        return Ok(TokenStatus::Expired);
    }
    let role = claims
        .role(admin_marker)
        .ok_or_else(|| ApiError::decode("Token carries no role claim"))?;
    Ok(TokenStatus::Valid { role, claims })
}

/// Like [`inspect_token_at`], using the system clock.
///
/// # Errors
/// See [`inspect_token_at`].
pub fn inspect_token(token: &str, admin_marker: &str) -> ApiResult<TokenStatus> {
    inspect_token_at(token, admin_marker, now_secs())
}

pub(crate) fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Builds an unsigned token around `payload` (tests and fixtures).
#[cfg(test)]
pub(crate) fn encode_test_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}
