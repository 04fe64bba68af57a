//! Form validation shared by the TUI screens and the CLI.
//!
//! Every check here runs before a request is built; a failing form never
//! reaches the network.

use crate::api::{ApiError, ApiResult};
use crate::media::MediaAsset;
use crate::models::Credentials;

pub const MISSING_CREDENTIALS: &str = "Please enter username and password";
pub const MISSING_SIGNUP_FIELDS: &str = "Please fill all fields";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MISSING_UPLOAD_FIELDS: &str = "Please fill all required fields";
pub const MISSING_VIDEO_ID: &str = "Please enter a video ID";
pub const INVALID_VIDEO_ID: &str = "Video ID must be a number";

/// Login form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    /// Returns a `Validation` error when either field is blank.
    pub fn validate(&self) -> ApiResult<Credentials> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(ApiError::validation(MISSING_CREDENTIALS));
        }
        Ok(Credentials {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Signup form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// # Errors
    /// Returns a `Validation` error for blank fields or mismatched passwords.
    pub fn validate(&self) -> ApiResult<Credentials> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(ApiError::validation(MISSING_SIGNUP_FIELDS));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::validation(PASSWORD_MISMATCH));
        }
        Ok(Credentials {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

/// A validated upload, ready for the multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUpload {
    pub title: String,
    pub description: String,
    pub video: MediaAsset,
    pub thumbnail: MediaAsset,
}

/// Admin upload form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub video: Option<MediaAsset>,
    pub thumbnail: Option<MediaAsset>,
}

impl UploadForm {
    /// True when video, thumbnail and a non-blank title are present.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && self.video.is_some() && self.thumbnail.is_some()
    }

    /// # Errors
    /// Returns a `Validation` error unless the form is complete.
    pub fn validate(&self) -> ApiResult<VideoUpload> {
        match (&self.video, &self.thumbnail) {
            (Some(video), Some(thumbnail)) if !self.title.trim().is_empty() => Ok(VideoUpload {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                video: video.clone(),
                thumbnail: thumbnail.clone(),
            }),
            _ => Err(ApiError::validation(MISSING_UPLOAD_FIELDS)),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validates a search box entry as a video id.
///
/// # Errors
/// Returns a `Validation` error for blank or non-numeric input.
pub fn validate_video_id(input: &str) -> ApiResult<String> {
    let id = input.trim();
    if id.is_empty() {
        return Err(ApiError::validation(MISSING_VIDEO_ID));
    }
    if !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::validation(INVALID_VIDEO_ID));
    }
    Ok(id.to_string())
}
