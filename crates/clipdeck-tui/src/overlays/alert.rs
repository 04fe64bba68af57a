//! Modal message box.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;

#[derive(Debug, Clone)]
pub struct AlertState {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl AlertState {
    pub fn new(title: impl Into<String>, message: impl Into<String>, is_error: bool) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            is_error,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ' | 'q') => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, status_y: u16) {
        use super::render_utils::{InputHint, OverlayConfig, render_overlay};

        let color = if self.is_error {
            Color::Red
        } else {
            Color::Green
        };
        let hints = [InputHint::new("Enter", "ok")];
        let layout = render_overlay(
            frame,
            area,
            status_y,
            &OverlayConfig {
                title: &self.title,
                border_color: color,
                width: 50,
                height: 6,
                hints: &hints,
            },
        );

        let body = Paragraph::new(Line::from(Span::styled(
            self.message.as_str(),
            Style::default().fg(Color::White),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(body, layout.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::test_keys::key;
    use crate::overlays::OverlayTransition;

    #[test]
    fn test_alert_closes_on_enter_and_esc() {
        let mut alert = AlertState::new("Success", "Video uploaded successfully", false);
        assert!(matches!(
            alert.handle_key(key(KeyCode::Char('x'))).transition,
            OverlayTransition::Stay
        ));
        assert!(matches!(
            alert.handle_key(key(KeyCode::Enter)).transition,
            OverlayTransition::Close
        ));
        assert!(matches!(
            alert.handle_key(key(KeyCode::Esc)).transition,
            OverlayTransition::Close
        ));
    }
}
