//! Feed feature reducer.

use std::path::PathBuf;

use clipdeck_core::api::ApiResult;
use clipdeck_core::models::Video;
use crossterm::event::{KeyCode, KeyEvent};

use super::state::FeedState;
use crate::common::Tasks;
use crate::effects::UiEffect;
use crate::features::ScreenUpdate;

pub const NO_PLAYABLE_DATA: &str = "This video has no playable data";

/// Effects to run when a feed-backed screen is shown.
pub fn mount(feed: &FeedState, tasks: &Tasks) -> Vec<UiEffect> {
    if feed.loaded || tasks.feed.is_running() {
        Vec::new()
    } else {
        vec![UiEffect::FetchVideos { task: None }]
    }
}

/// Re-fetches the feed unless a fetch is already in flight.
pub fn refresh(tasks: &Tasks) -> ScreenUpdate {
    if tasks.feed.is_running() {
        ScreenUpdate::none()
    } else {
        ScreenUpdate::effect(UiEffect::FetchVideos { task: None })
    }
}

pub fn handle_feed_key(
    feed: &mut FeedState,
    detail: &mut Option<Video>,
    tasks: &Tasks,
    key: KeyEvent,
) -> ScreenUpdate {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            feed.select_next();
            ScreenUpdate::none()
        }
        KeyCode::Up | KeyCode::Char('k') => {
            feed.select_prev();
            ScreenUpdate::none()
        }
        KeyCode::Home | KeyCode::Char('g') => {
            feed.selected = 0;
            ScreenUpdate::none()
        }
        KeyCode::End | KeyCode::Char('G') => {
            feed.selected = feed.videos.len().saturating_sub(1);
            ScreenUpdate::none()
        }
        KeyCode::Enter => {
            if let Some(video) = feed.selected_video() {
                *detail = Some(video.clone());
            }
            ScreenUpdate::none()
        }
        KeyCode::Char('r') => refresh(tasks),
        _ => ScreenUpdate::none(),
    }
}

pub fn handle_videos_loaded(feed: &mut FeedState, result: ApiResult<Vec<Video>>) -> ScreenUpdate {
    match result {
        Ok(videos) => {
            tracing::debug!(count = videos.len(), "feed loaded");
            feed.replace(videos);
            ScreenUpdate::none()
        }
        Err(err) => {
            tracing::warn!(kind = %err.kind, error = %err, "failed to fetch videos");
            feed.loaded = true;
            feed.error = Some(err.message.clone());
            ScreenUpdate::status(format!("Failed to load videos: {}", err.message))
        }
    }
}

/// Keys on the detail view. Closing clears `detail`.
pub fn handle_detail_key(detail: &mut Option<Video>, tasks: &Tasks, key: KeyEvent) -> ScreenUpdate {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q')
    ) {
        *detail = None;
        return ScreenUpdate::none();
    }
    let Some(video) = detail.as_ref() else {
        return ScreenUpdate::none();
    };
    match key.code {
        KeyCode::Char('p') | KeyCode::Enter => {
            if !video.has_playable_data() {
                return ScreenUpdate::status(NO_PLAYABLE_DATA);
            }
            if tasks.playback.is_running() {
                return ScreenUpdate::none();
            }
            ScreenUpdate::effect(UiEffect::PlayVideo {
                task: None,
                video: video.clone(),
            })
        }
        _ => ScreenUpdate::none(),
    }
}

pub fn handle_playback_ready(result: Result<PathBuf, String>) -> ScreenUpdate {
    match result {
        Ok(path) => {
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            tracing::info!(path = %path.display(), "opened video in system player");
            ScreenUpdate::status(format!("Playing {name}"))
        }
        Err(err) => {
            tracing::warn!(error = %err, "playback failed");
            ScreenUpdate::status(format!("Playback failed: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use clipdeck_core::api::ApiError;

    use super::*;
    use crate::common::TaskId;
    use crate::features::test_keys::key;

    fn video(id: &str, data: Option<&str>) -> Video {
        Video {
            id: id.to_string(),
            title: Some(format!("Clip {id}")),
            video_data: data.map(ToString::to_string),
            ..Video::default()
        }
    }

    #[test]
    fn test_mount_fetches_once() {
        let mut feed = FeedState::default();
        let mut tasks = Tasks::default();
        assert_eq!(mount(&feed, &tasks).len(), 1);

        tasks.feed.active = Some(TaskId(1));
        assert!(mount(&feed, &tasks).is_empty());

        tasks.feed.clear();
        feed.loaded = true;
        assert!(mount(&feed, &tasks).is_empty());
    }

    #[test]
    fn test_enter_opens_detail() {
        let mut feed = FeedState::default();
        feed.replace(vec![video("1", None), video("2", None)]);
        let mut detail = None;
        let tasks = Tasks::default();

        handle_feed_key(&mut feed, &mut detail, &tasks, key(KeyCode::Char('j')));
        handle_feed_key(&mut feed, &mut detail, &tasks, key(KeyCode::Enter));

        assert_eq!(detail.map(|v| v.id), Some("2".to_string()));
    }

    #[test]
    fn test_load_error_is_kept_on_screen() {
        let mut feed = FeedState::default();
        let update = handle_videos_loaded(&mut feed, Err(ApiError::http_status(500, "")));
        assert!(feed.loaded);
        assert_eq!(feed.error.as_deref(), Some("HTTP 500"));
        assert_eq!(update.status.as_deref(), Some("Failed to load videos: HTTP 500"));

        handle_videos_loaded(&mut feed, Ok(vec![video("1", None)]));
        assert!(feed.error.is_none());
        assert_eq!(feed.videos.len(), 1);
    }

    /// Test: a video without inline data never starts playback.
    #[test]
    fn test_play_requires_data() {
        let tasks = Tasks::default();
        let mut detail = Some(video("1", None));
        let update = handle_detail_key(&mut detail, &tasks, key(KeyCode::Char('p')));
        assert!(update.effects.is_empty());
        assert_eq!(update.status.as_deref(), Some(NO_PLAYABLE_DATA));

        let mut detail = Some(video("2", Some("AAAA")));
        let update = handle_detail_key(&mut detail, &tasks, key(KeyCode::Char('p')));
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::PlayVideo { video, .. }] if video.id == "2"
        ));
    }

    #[test]
    fn test_esc_closes_detail() {
        let mut detail = Some(video("1", None));
        handle_detail_key(&mut detail, &Tasks::default(), key(KeyCode::Esc));
        assert!(detail.is_none());
    }

    #[test]
    fn test_playback_status() {
        let update = handle_playback_ready(Ok(PathBuf::from("/tmp/cache/video-7.mp4")));
        assert_eq!(update.status.as_deref(), Some("Playing video-7.mp4"));
        let update = handle_playback_ready(Err("no player".to_string()));
        assert_eq!(update.status.as_deref(), Some("Playback failed: no player"));
    }
}
