use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::SearchState;
use crate::overlays::render_utils::{InputLine, error_line, render_input_line, render_separator};

pub fn render_search(frame: &mut Frame, area: Rect, search: &SearchState, searching: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Search by ID ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input_area, _, message_area, result_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_input_line(
        frame,
        input_area,
        &InputLine {
            value: &search.query,
            placeholder: Some("Enter a video ID"),
            prompt: "ID > ",
            prompt_color: Color::Cyan,
            text_color: Color::White,
            placeholder_color: Color::DarkGray,
            cursor_color: Color::Cyan,
        },
    );
    render_separator(frame, inner, 1);

    let message = if searching {
        Line::from(Span::styled(
            "Searching…",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        error_line(search.error.as_deref())
    };
    frame.render_widget(Paragraph::new(message), message_area);

    if let Some(video) = &search.result {
        let lines = vec![
            Line::from(Span::styled(
                video.display_title().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                video.display_description().to_string(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Tab to reopen",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), result_area);
    }
}
