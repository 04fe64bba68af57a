//! Search feature reducer.

use clipdeck_core::api::ApiResult;
use clipdeck_core::forms::validate_video_id;
use clipdeck_core::models::Video;
use crossterm::event::{KeyCode, KeyEvent};

use super::state::SearchState;
use crate::common::Tasks;
use crate::effects::UiEffect;
use crate::features::{ScreenUpdate, edit_field};

pub const VIDEO_NOT_FOUND: &str = "Video not found";

pub fn handle_search_key(
    search: &mut SearchState,
    detail: &mut Option<Video>,
    tasks: &Tasks,
    key: KeyEvent,
) -> ScreenUpdate {
    match key.code {
        KeyCode::Enter => {
            let id = match validate_video_id(&search.query) {
                Ok(id) => id,
                Err(err) => {
                    search.error = Some(err.message);
                    return ScreenUpdate::none();
                }
            };
            if tasks.video_lookup.is_running() {
                return ScreenUpdate::none();
            }
            search.error = None;
            ScreenUpdate::effect(UiEffect::FetchVideo { task: None, id })
        }
        KeyCode::Tab => {
            if let Some(video) = &search.result {
                *detail = Some(video.clone());
            }
            ScreenUpdate::none()
        }
        KeyCode::Esc => {
            search.query.clear();
            search.error = None;
            ScreenUpdate::none()
        }
        _ => {
            if edit_field(&mut search.query, key) {
                search.error = None;
            }
            ScreenUpdate::none()
        }
    }
}

/// Applies a lookup result: a hit opens the detail view.
pub fn handle_video_found(
    search: &mut SearchState,
    detail: &mut Option<Video>,
    result: ApiResult<Video>,
) -> ScreenUpdate {
    match result {
        Ok(video) => {
            search.error = None;
            search.result = Some(video.clone());
            *detail = Some(video);
            ScreenUpdate::none()
        }
        Err(err) => {
            tracing::warn!(kind = %err.kind, error = %err, query = %search.query, "video lookup failed");
            search.error = Some(VIDEO_NOT_FOUND.to_string());
            search.result = None;
            if err.is_network() {
                ScreenUpdate::status(err.message)
            } else {
                ScreenUpdate::none()
            }
        }
    }
}
