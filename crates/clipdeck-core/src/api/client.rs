//! Authenticated API client.
//!
//! All requests go through [`ApiClient::send`], which attaches the stored
//! bearer token and clears the session on a 401.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiErrorKind, ApiResult};
use crate::claims::{TokenStatus, inspect_token};
use crate::config::Config;
use crate::forms::{MISSING_UPLOAD_FIELDS, MISSING_VIDEO_ID, VideoUpload};
use crate::media::MediaAsset;
use crate::models::{Credentials, LoginResponse, Video};
use crate::session::SessionStore;

const USER_AGENT: &str = concat!("clipdeck/", env!("CARGO_PKG_VERSION"));

pub const UPLOAD_FORBIDDEN_MESSAGE: &str = "Unauthorized: Only admins can upload videos.";
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid username or password";

/// Client for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    admin_role: String,
}

impl ApiClient {
    /// Creates a client for `base_url` (no trailing slash needed).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        session: SessionStore,
        admin_role: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            admin_role: admin_role.to_string(),
        })
    }

    /// Creates a client from the loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the API URL is invalid or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &Config, session: SessionStore) -> Result<Self> {
        let base_url = config.effective_api_url()?;
        Self::new(
            &base_url,
            session,
            &config.admin_role,
            config.request_timeout(),
        )
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends a request with the stored bearer token attached.
    ///
    /// Non-2xx responses become errors; a 401 also clears the session.
    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request failed");
            ApiError::transport(&e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("session expired, clearing stored credentials");
            if let Err(err) = self.session.clear() {
                tracing::error!(error = %format!("{err:#}"), "failed to clear session");
            }
            return Err(ApiError::unauthorized(&body));
        }

        tracing::warn!(status = status.as_u16(), "request rejected");
        Err(ApiError::http_status(status.as_u16(), &body))
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        let body = response.text().await.map_err(|e| ApiError::transport(&e))?;
        serde_json::from_str(&body).map_err(|e| {
            ApiError::parse("Unexpected response from the server").with_details(e.to_string())
        })
    }

    /// Registers a new account. The response body is ignored.
    ///
    /// # Errors
    /// Returns an error if the request fails or the server rejects it.
    pub async fn signup(&self, credentials: &Credentials) -> ApiResult<()> {
        tracing::info!(username = %credentials.username, "signing up");
        self.send(self.http.post(self.endpoint("users/register")).json(credentials))
            .await?;
        Ok(())
    }

    /// Logs in and persists the issued token and admin flag.
    ///
    /// The token must carry a readable role; otherwise nothing is stored
    /// and a `Decode` error is returned.
    ///
    /// # Errors
    /// Returns an error on transport failure, rejected credentials, an
    /// unreadable token, or a store write failure.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        tracing::info!(username = %credentials.username, "logging in");
        let request = self.http.post(self.endpoint("users/login")).json(credentials);
        let login: LoginResponse = self.send_json(request).await.map_err(|err| {
            if err.kind == ApiErrorKind::Unauthorized {
                ApiError {
                    message: INVALID_LOGIN_MESSAGE.to_string(),
                    ..err
                }
            } else {
                err
            }
        })?;

        if let TokenStatus::Expired = inspect_token(&login.token, &self.admin_role)? {
            return Err(ApiError::decode("Server issued an expired token"));
        }

        self.session
            .begin(&login.token, login.is_admin)
            .map_err(|e| {
                ApiError::validation("Failed to save session").with_details(format!("{e:#}"))
            })?;
        Ok(login)
    }

    /// Clears the stored session. No request is sent.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn logout(&self) -> Result<()> {
        self.session.clear()
    }

    /// Fetches the full video list.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not a list.
    pub async fn list_videos(&self) -> ApiResult<Vec<Video>> {
        self.send_json(self.http.get(self.endpoint("videos"))).await
    }

    /// Fetches one video by id.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not a video.
    pub async fn get_video(&self, id: &str) -> ApiResult<Video> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ApiError::validation(MISSING_VIDEO_ID));
        }
        self.send_json(self.http.get(self.endpoint(&format!("videos/{id}"))))
            .await
    }

    /// Uploads a video as multipart form data.
    ///
    /// Refused locally, before any request, when the stored admin flag is
    /// false or no token is stored. The backend still authorizes.
    ///
    /// Returns the created video when the response body describes one.
    ///
    /// # Errors
    /// Returns `Forbidden`, `NotAuthenticated` or `Validation` for local
    /// refusals, otherwise transport or server errors.
    pub async fn upload_video(&self, upload: &VideoUpload) -> ApiResult<Option<Video>> {
        if !self.session.is_admin() {
            tracing::warn!("upload refused: stored admin flag is false");
            return Err(ApiError::forbidden(UPLOAD_FORBIDDEN_MESSAGE));
        }
        if self.session.token().is_none() {
            return Err(ApiError::not_authenticated());
        }
        if upload.title.trim().is_empty() {
            return Err(ApiError::validation(MISSING_UPLOAD_FIELDS));
        }

        let form = Form::new()
            .part("video", media_part(&upload.video)?)
            .part("thumbnail", media_part(&upload.thumbnail)?)
            .text("title", upload.title.clone())
            .text("description", upload.description.clone());

        tracing::info!(
            title = %upload.title,
            video_bytes = upload.video.bytes.len(),
            thumbnail_bytes = upload.thumbnail.bytes.len(),
            "uploading video"
        );
        let response = self
            .send(self.http.post(self.endpoint("videos")).multipart(form))
            .await?;
        // The upload already succeeded; an unreadable body only loses the echo.
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read upload response body");
                return Ok(None);
            }
        };
        match serde_json::from_str(&body) {
            Ok(video) => Ok(Some(video)),
            Err(err) => {
                tracing::debug!(error = %err, "upload response is not a video");
                Ok(None)
            }
        }
    }
}

fn media_part(asset: &MediaAsset) -> ApiResult<Part> {
    Part::bytes(asset.bytes.clone())
        .file_name(asset.file_name.clone())
        .mime_str(&asset.mime_type)
        .map_err(|e| {
            ApiError::validation(format!("Invalid media type {}", asset.mime_type))
                .with_details(e.to_string())
        })
}
