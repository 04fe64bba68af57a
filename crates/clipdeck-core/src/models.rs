//! Wire and domain types shared by the client, CLI and TUI.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize};

/// Username/password pair sent to `/users/login` and `/users/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body returned by `/users/login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
}

/// A video as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Base64 video payload, when the endpoint inlines it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_data: Option<String>,
    /// Base64 thumbnail payload, when the endpoint inlines it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_data: Option<String>,
}

impl Video {
    pub const NO_TITLE: &str = "No Title Available";
    pub const NO_DESCRIPTION: &str = "No Description Available";

    pub fn display_title(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or(Self::NO_TITLE)
    }

    pub fn display_description(&self) -> &str {
        non_blank(self.description.as_deref()).unwrap_or(Self::NO_DESCRIPTION)
    }

    pub fn has_playable_data(&self) -> bool {
        non_blank(self.video_data.as_deref()).is_some()
    }

    /// Decodes the inline video payload.
    ///
    /// # Errors
    /// Returns an error if the payload is not valid base64.
    pub fn decode_video_data(&self) -> anyhow::Result<Option<Vec<u8>>> {
        decode_inline(self.video_data.as_deref())
    }

    /// Decodes the inline thumbnail payload.
    ///
    /// # Errors
    /// Returns an error if the payload is not valid base64.
    pub fn decode_thumbnail_data(&self) -> anyhow::Result<Option<Vec<u8>>> {
        decode_inline(self.thumbnail_data.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn decode_inline(data: Option<&str>) -> anyhow::Result<Option<Vec<u8>>> {
    use anyhow::Context;

    let Some(data) = non_blank(data) else {
        return Ok(None);
    };
    // Data URLs carry a "data:<mime>;base64," prefix.
    let raw = data.split_once(";base64,").map_or(data, |(_, rest)| rest);
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD
        .decode(cleaned)
        .map(Some)
        .context("Inline media is not valid base64")
}

/// Accepts numeric or string ids.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("invalid video id: {other}"))),
    }
}

/// A notification row shown on the notifications screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub read: bool,
}

impl Notification {
    /// Builds the "new upload" notification for a feed entry.
    pub fn for_upload(video: &Video, timestamp: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            id: format!("video-{}", video.id),
            title: "New Video Upload".to_string(),
            message: format!("\"{}\" is now available to watch.", video.display_title()),
            timestamp,
            read: false,
        }
    }
}
