//! Analytics dashboard.
//!
//! The backend exposes no statistics, so only the video count is real; the
//! other cards and both charts are placeholders.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::Tasks;
use crate::features::feed::{self, FeedState};
use crate::features::ScreenUpdate;

const UNKNOWN: &str = "—";

pub fn handle_analytics_key(tasks: &Tasks, key: KeyEvent) -> ScreenUpdate {
    match key.code {
        KeyCode::Char('r') => feed::refresh(tasks),
        _ => ScreenUpdate::none(),
    }
}

/// Card values: (label, value).
fn cards(feed: &FeedState) -> [(&'static str, String); 3] {
    let total_videos = if feed.loaded && feed.error.is_none() {
        format_count(feed.videos.len())
    } else {
        UNKNOWN.to_string()
    };
    [
        ("Total Videos", total_videos),
        ("Total Users", UNKNOWN.to_string()),
        ("Total Views", UNKNOWN.to_string()),
    ]
}

/// Formats a count with thousands separators: 12345 -> "12,345".
fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn render_section(frame: &mut Frame, area: Rect, title: &str, placeholder: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {title} "));
    let body = Paragraph::new(Span::styled(
        placeholder,
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(body, area);
}

pub fn render_analytics(frame: &mut Frame, area: Rect, feed: &FeedState) {
    let [header_area, cards_area, views_area, categories_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Min(3),
        Constraint::Min(3),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Analytics Dashboard",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        header_area,
    );

    let card_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards_area);
    for ((label, value), card_area) in cards(feed).into_iter().zip(card_areas.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(card, *card_area);
    }

    render_section(
        frame,
        views_area,
        "Views Over Time",
        "Chart will be implemented here",
    );
    render_section(
        frame,
        categories_area,
        "Popular Categories",
        "Category distribution chart",
    );
}
