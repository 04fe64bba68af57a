use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::state::NotificationsState;

pub fn render_notifications(frame: &mut Frame, area: Rect, state: &NotificationsState) {
    let title = match state.unread_count() {
        0 => " Notifications ".to_string(),
        n => format!(" Notifications ({n} unread) "),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No notifications",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = state
        .items
        .iter()
        .map(|n| {
            let (marker, title_style) = if n.read {
                ("  ", Style::default().fg(Color::Gray))
            } else {
                (
                    "● ",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            };
            let when = n.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M");
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(n.title.clone(), title_style),
                    Span::styled(format!("  {when}"), Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", n.message),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, inner, &mut list_state);
}
