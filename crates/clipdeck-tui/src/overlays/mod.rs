//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay owns its state, key handler, and render function.
//!
//! - `alert.rs`: message box (success and error notices)
//! - `media_picker.rs`: local file path prompt for uploads and the avatar
//! - `render_utils.rs`: shared rendering helpers, also used by screens

pub mod alert;
pub mod media_picker;
pub mod render_utils;

pub use alert::AlertState;
use crossterm::event::KeyEvent;
pub use media_picker::{MediaPickerState, MediaTarget};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::state::TuiState;

/// Requests to open a new overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayRequest {
    MediaPicker {
        target: MediaTarget,
    },
    Alert {
        title: String,
        message: String,
        is_error: bool,
    },
}

impl OverlayRequest {
    pub fn error(message: impl Into<String>) -> Self {
        OverlayRequest::Alert {
            title: "Error".to_string(),
            message: message.into(),
            is_error: true,
        }
    }
}

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
    Open(OverlayRequest),
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    pub fn open(request: OverlayRequest) -> Self {
        Self::new(OverlayTransition::Open(request))
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    MediaPicker(MediaPickerState),
    Alert(AlertState),
}

impl Overlay {
    pub fn open(request: OverlayRequest) -> Self {
        match request {
            OverlayRequest::MediaPicker { target } => {
                Overlay::MediaPicker(MediaPickerState::open(target))
            }
            OverlayRequest::Alert {
                title,
                message,
                is_error,
            } => Overlay::Alert(AlertState::new(title, message, is_error)),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, status_y: u16) {
        match self {
            Overlay::MediaPicker(p) => p.render(frame, area, status_y),
            Overlay::Alert(a) => a.render(frame, area, status_y),
        }
    }

    /// Bracketed paste; only text inputs take it.
    pub fn paste(&mut self, text: &str) {
        if let Overlay::MediaPicker(p) = self {
            p.paste(text);
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::MediaPicker(p) => p.handle_key(tui, key),
            Overlay::Alert(a) => a.handle_key(key),
        }
    }
}

/// Extension trait for `Option<Overlay>` providing a render helper.
pub trait OverlayExt {
    fn render(&self, frame: &mut Frame, area: Rect, status_y: u16);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, status_y: u16) {
        if let Some(overlay) = self {
            overlay.render(frame, area, status_y);
        }
    }
}
