//! Media picker overlay: asks for a local file path to attach.

use clipdeck_core::media::{MediaKind, normalize_input_path};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{OverlayRequest, OverlayUpdate};
use crate::effects::UiEffect;
use crate::state::TuiState;

/// Where a picked file ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTarget {
    Video,
    Thumbnail,
    Avatar,
}

impl MediaTarget {
    pub fn kind(self) -> MediaKind {
        match self {
            MediaTarget::Video => MediaKind::Video,
            MediaTarget::Thumbnail | MediaTarget::Avatar => MediaKind::Image,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaTarget::Video => "video",
            MediaTarget::Thumbnail => "thumbnail",
            MediaTarget::Avatar => "avatar",
        }
    }

    /// Alert shown when the picker is dismissed without a file.
    pub fn cancel_message(self) -> Option<&'static str> {
        match self {
            MediaTarget::Video => Some("No video selected!"),
            MediaTarget::Thumbnail => Some("No thumbnail selected!"),
            MediaTarget::Avatar => None,
        }
    }

    /// Alert prefix for a file that could not be loaded.
    pub fn failure_message(self) -> &'static str {
        match self {
            MediaTarget::Video => "Failed to pick a video",
            MediaTarget::Thumbnail => "Failed to pick a thumbnail",
            MediaTarget::Avatar => "Failed to pick an image",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MediaPickerState {
    pub target: MediaTarget,
    pub input: String,
    pub error: Option<String>,
}

impl MediaPickerState {
    pub fn open(target: MediaTarget) -> Self {
        Self {
            target,
            input: String::new(),
            error: None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, status_y: u16) {
        render_media_picker(frame, self, area, status_y);
    }

    /// Appends pasted text; terminals paste a dropped file's path this way.
    pub fn paste(&mut self, text: &str) {
        self.error = None;
        self.input.push_str(text.trim_end_matches(['\n', '\r']));
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if !matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.error = None;
        }

        match key.code {
            KeyCode::Esc => match self.target.cancel_message() {
                Some(message) => OverlayUpdate::open(OverlayRequest::Alert {
                    title: "Error".to_string(),
                    message: message.to_string(),
                    is_error: true,
                }),
                None => OverlayUpdate::close(),
            },
            KeyCode::Enter => {
                if self.input.trim().is_empty() {
                    self.error = Some("Enter a file path".to_string());
                    OverlayUpdate::stay()
                } else if tui.tasks.media_load.is_running() {
                    self.error = Some("Still loading the previous file...".to_string());
                    OverlayUpdate::stay()
                } else {
                    OverlayUpdate::close().with_ui_effects(vec![UiEffect::LoadMedia {
                        task: None,
                        target: self.target,
                        path: normalize_input_path(&self.input),
                    }])
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }
}

fn render_media_picker(frame: &mut Frame, state: &MediaPickerState, area: Rect, status_y: u16) {
    use super::render_utils::{
        InputHint, InputLine, OverlayConfig, render_input_line, render_overlay, render_separator,
    };

    let hints = [
        InputHint::new("Enter", "attach"),
        InputHint::new("Esc", "cancel"),
    ];
    let title = format!("Select {}", state.target.label());
    let layout = render_overlay(
        frame,
        area,
        status_y,
        &OverlayConfig {
            title: &title,
            border_color: Color::Cyan,
            width: 64,
            height: 7,
            hints: &hints,
        },
    );

    let input_area = Rect::new(layout.body.x, layout.body.y, layout.body.width, 1);
    render_input_line(
        frame,
        input_area,
        &InputLine {
            value: &state.input,
            placeholder: Some("/path/to/file"),
            prompt: "> ",
            prompt_color: Color::DarkGray,
            text_color: Color::Cyan,
            placeholder_color: Color::DarkGray,
            cursor_color: Color::Cyan,
        },
    );

    render_separator(frame, layout.body, 1);

    let (help_text, help_style) = match &state.error {
        Some(error) => (error.clone(), Style::default().fg(Color::Red)),
        None => (
            format!("Path to a local {} file", state.target.kind().label()),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let help_area = Rect::new(layout.body.x, layout.body.y + 2, layout.body.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(help_text, help_style))),
        help_area,
    );

    render_separator(frame, layout.body, 3);
}

#[cfg(test)]
mod tests {
    use clipdeck_core::config::Config;

    use super::*;
    use crate::common::TaskId;
    use crate::features::test_keys::{chars, key};
    use crate::overlays::OverlayTransition;

    fn tui() -> TuiState {
        TuiState::new(&Config::default())
    }

    #[test]
    fn test_enter_emits_load_media() {
        let tui = tui();
        let mut picker = MediaPickerState::open(MediaTarget::Video);
        for k in chars("/tmp/clip\\ one.mp4") {
            picker.handle_key(&tui, k);
        }

        let update = picker.handle_key(&tui, key(KeyCode::Enter));

        assert!(matches!(update.transition, OverlayTransition::Close));
        match update.effects.as_slice() {
            [UiEffect::LoadMedia { target, path, .. }] => {
                assert_eq!(*target, MediaTarget::Video);
                assert_eq!(path.to_str(), Some("/tmp/clip one.mp4"));
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_empty_path_stays_open() {
        let tui = tui();
        let mut picker = MediaPickerState::open(MediaTarget::Thumbnail);
        let update = picker.handle_key(&tui, key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert!(picker.error.is_some());
    }

    #[test]
    fn test_busy_loader_blocks_submit() {
        let mut tui = tui();
        tui.tasks.media_load.active = Some(TaskId(9));
        let mut picker = MediaPickerState::open(MediaTarget::Video);
        picker.input = "/tmp/a.mp4".to_string();

        let update = picker.handle_key(&tui, key(KeyCode::Enter));

        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert!(update.effects.is_empty());
    }

    /// Test: dismissing an upload picker explains that nothing was chosen.
    #[test]
    fn test_cancel_alerts_for_upload_targets() {
        let tui = tui();
        let mut picker = MediaPickerState::open(MediaTarget::Thumbnail);
        let update = picker.handle_key(&tui, key(KeyCode::Esc));
        match update.transition {
            OverlayTransition::Open(OverlayRequest::Alert { message, .. }) => {
                assert_eq!(message, "No thumbnail selected!");
            }
            other => panic!("unexpected transition: {other:?}"),
        }

        let mut avatar = MediaPickerState::open(MediaTarget::Avatar);
        let update = avatar.handle_key(&tui, key(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
    }
}
