use crossterm::event::{KeyCode, KeyEvent};

use super::state::NotificationsState;
use crate::common::Tasks;
use crate::features::{ScreenUpdate, feed};

pub fn handle_notifications_key(
    state: &mut NotificationsState,
    tasks: &Tasks,
    key: KeyEvent,
) -> ScreenUpdate {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selected + 1 < state.items.len() {
                state.selected += 1;
            }
            ScreenUpdate::none()
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
            ScreenUpdate::none()
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.mark_selected_read();
            ScreenUpdate::none()
        }
        KeyCode::Char('a') => {
            state.mark_all_read();
            ScreenUpdate::none()
        }
        KeyCode::Char('r') => feed::refresh(tasks),
        _ => ScreenUpdate::none(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use clipdeck_core::models::Video;

    use super::*;
    use crate::effects::UiEffect;
    use crate::features::test_keys::key;

    #[test]
    fn test_enter_marks_selected_read() {
        let mut state = NotificationsState::default();
        let videos: Vec<Video> = ["1", "2"]
            .iter()
            .map(|id| Video {
                id: (*id).to_string(),
                ..Video::default()
            })
            .collect();
        state.sync(&videos, Utc::now());
        let tasks = Tasks::default();

        handle_notifications_key(&mut state, &tasks, key(KeyCode::Down));
        handle_notifications_key(&mut state, &tasks, key(KeyCode::Enter));

        assert!(!state.items[0].read);
        assert!(state.items[1].read);

        handle_notifications_key(&mut state, &tasks, key(KeyCode::Char('a')));
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn test_refresh_fetches_feed() {
        let mut state = NotificationsState::default();
        let update = handle_notifications_key(&mut state, &Tasks::default(), key(KeyCode::Char('r')));
        assert!(matches!(update.effects.as_slice(), [UiEffect::FetchVideos { .. }]));
    }
}
