//! Feature slices for the TUI (state/update/render per screen).

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod feed;
pub mod notifications;
pub mod profile;
pub mod search;

use clipdeck_core::navigator::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::overlays::OverlayRequest;

/// Result of a screen key handler.
#[derive(Debug, Default)]
pub struct ScreenUpdate {
    pub effects: Vec<UiEffect>,
    /// Switch to another screen of the mounted tree.
    pub navigate: Option<Screen>,
    pub overlay: Option<OverlayRequest>,
    /// Transient message for the status line.
    pub status: Option<String>,
}

impl ScreenUpdate {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn effect(effect: UiEffect) -> Self {
        Self {
            effects: vec![effect],
            ..Self::default()
        }
    }

    pub fn navigate(screen: Screen) -> Self {
        Self {
            navigate: Some(screen),
            ..Self::default()
        }
    }

    pub fn open(request: OverlayRequest) -> Self {
        Self {
            overlay: Some(request),
            ..Self::default()
        }
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self {
            status: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Applies a plain editing key to a single-line text field.
///
/// Returns true when the key was consumed.
pub(crate) fn edit_field(value: &mut String, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Backspace => {
            value.pop();
            true
        }
        KeyCode::Char('u') if ctrl => {
            value.clear();
            true
        }
        KeyCode::Char(c) if !ctrl => {
            value.push(c);
            true
        }
        _ => false,
    }
}

/// Moves a focus index forward or backward with wrap-around.
pub(crate) fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn chars(text: &str) -> Vec<KeyEvent> {
        text.chars().map(|c| key(KeyCode::Char(c))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_keys::{ctrl, key};
    use super::*;

    #[test]
    fn test_edit_field() {
        let mut value = String::new();
        assert!(edit_field(&mut value, key(KeyCode::Char('a'))));
        assert!(edit_field(&mut value, key(KeyCode::Char('b'))));
        assert!(edit_field(&mut value, key(KeyCode::Backspace)));
        assert_eq!(value, "a");
        assert!(edit_field(&mut value, ctrl('u')));
        assert!(value.is_empty());
        assert!(!edit_field(&mut value, key(KeyCode::Enter)));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(2, 3, true), 0);
        assert_eq!(cycle(0, 3, false), 2);
        assert_eq!(cycle(0, 0, true), 0);
    }
}
