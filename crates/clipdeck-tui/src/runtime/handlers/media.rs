use std::path::PathBuf;

use clipdeck_core::media::{MediaAsset, write_playback_file};
use clipdeck_core::models::Video;

use crate::events::UiEvent;
use crate::overlays::MediaTarget;

/// Reads a picked file off the async runtime.
pub async fn load_media(target: MediaTarget, path: PathBuf) -> UiEvent {
    let result = tokio::task::spawn_blocking(move || {
        MediaAsset::load(&path, target.kind()).map_err(|e| format!("{e:#}"))
    })
    .await
    .unwrap_or_else(|e| Err(format!("Task failed: {e}")));
    UiEvent::MediaPicked { target, result }
}

/// Writes the video payload to the cache and hands it to the system player.
pub async fn play_video(cache_dir: PathBuf, video: Video) -> UiEvent {
    let result = tokio::task::spawn_blocking(move || {
        let path = write_playback_file(&cache_dir, &video).map_err(|e| format!("{e:#}"))?;
        open::that(&path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
        Ok(path)
    })
    .await
    .unwrap_or_else(|e| Err(format!("Task failed: {e}")));
    UiEvent::PlaybackReady(result)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[tokio::test]
    async fn test_load_media_reads_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("me.png");
        fs::write(&path, PNG_HEADER).unwrap();

        match load_media(MediaTarget::Avatar, path).await {
            UiEvent::MediaPicked {
                target: MediaTarget::Avatar,
                result: Ok(asset),
            } => assert_eq!(asset.mime_type, "image/png"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_media_reports_missing_file() {
        let dir = tempdir().unwrap();
        let event = load_media(MediaTarget::Video, dir.path().join("nope.mp4")).await;
        assert!(matches!(
            event,
            UiEvent::MediaPicked {
                result: Err(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_play_video_without_payload_fails() {
        let dir = tempdir().unwrap();
        let video = Video {
            id: "1".to_string(),
            ..Video::default()
        };
        match play_video(dir.path().to_path_buf(), video).await {
            UiEvent::PlaybackReady(Err(err)) => assert!(err.contains("no playable data")),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
