//! Video command handlers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clipdeck_core::api::ApiClient;
use clipdeck_core::config::Config;
use clipdeck_core::forms::{UploadForm, validate_video_id};
use clipdeck_core::media::{MediaAsset, MediaKind};
use clipdeck_core::session::SessionStore;

pub struct UploadArgs {
    pub title: String,
    pub description: String,
    pub video: PathBuf,
    pub thumbnail: PathBuf,
}

pub async fn list(config: &Config, session: SessionStore) -> Result<()> {
    let client = ApiClient::from_config(config, session)?;
    let videos = client.list_videos().await?;
    if videos.is_empty() {
        println!("No videos found.");
    } else {
        for video in videos {
            println!("{}  {}", video.id, video.display_title());
        }
    }
    Ok(())
}

pub async fn show(config: &Config, session: SessionStore, id: &str) -> Result<()> {
    let id = validate_video_id(id)?;
    let client = ApiClient::from_config(config, session)?;
    let video = client.get_video(&id).await?;

    println!("ID:          {}", video.id);
    println!("Title:       {}", video.display_title());
    println!("Description: {}", video.display_description());
    if let Some(url) = video.thumbnail_url.as_deref() {
        println!("Thumbnail:   {url}");
    }
    if video.has_playable_data() {
        println!("Playback:    available");
    }
    Ok(())
}

pub async fn upload(config: &Config, session: SessionStore, args: UploadArgs) -> Result<()> {
    let video = MediaAsset::load(&args.video, MediaKind::Video).context("load video")?;
    let thumbnail =
        MediaAsset::load(&args.thumbnail, MediaKind::Image).context("load thumbnail")?;
    let upload = UploadForm {
        title: args.title,
        description: args.description,
        video: Some(video),
        thumbnail: Some(thumbnail),
    }
    .validate()?;

    let client = ApiClient::from_config(config, session)?;
    match client.upload_video(&upload).await? {
        Some(video) => println!("Uploaded {}  {}", video.id, video.display_title()),
        None => println!("Uploaded {}", upload.title),
    }
    Ok(())
}
