use clipdeck_core::models::Video;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::state::FeedState;
use crate::common::truncate_with_ellipsis;

pub fn render_feed(frame: &mut Frame, area: Rect, feed: &FeedState, loading: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Latest videos ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if feed.videos.is_empty() {
        let (text, color) = if loading {
            ("Loading videos…".to_string(), Color::DarkGray)
        } else if let Some(error) = &feed.error {
            (error.clone(), Color::Red)
        } else if feed.loaded {
            ("No videos yet".to_string(), Color::DarkGray)
        } else {
            (String::new(), Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(color))),
            inner,
        );
        return;
    }

    let [list_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let width = list_area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = feed
        .videos
        .iter()
        .map(|video| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    truncate_with_ellipsis(video.display_title(), width),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate_with_ellipsis(video.display_description(), width),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▌ ");
    let mut state = ListState::default().with_selected(Some(feed.selected));
    frame.render_stateful_widget(list, list_area, &mut state);

    let footer = match &feed.error {
        Some(error) => Span::styled(error.clone(), Style::default().fg(Color::Red)),
        None => Span::styled(
            format!("{} videos", feed.videos.len()),
            Style::default().fg(Color::DarkGray),
        ),
    };
    frame.render_widget(Paragraph::new(footer), footer_area);
}

pub fn render_detail(frame: &mut Frame, area: Rect, video: &Video, playing: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Video ");

    let label = Style::default().fg(Color::DarkGray);
    let payload = if video.has_playable_data() {
        if playing {
            "preparing playback…"
        } else {
            "available (p to play)"
        }
    } else {
        "not available"
    };

    let mut lines = vec![
        Line::from(Span::styled(
            video.display_title().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(video.display_description().to_string()),
        Line::default(),
        Line::from(vec![
            Span::styled("ID: ", label),
            Span::raw(video.id.clone()),
        ]),
    ];
    if let Some(url) = video.thumbnail_url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(Line::from(vec![
            Span::styled("Thumbnail: ", label),
            Span::raw(url.to_string()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Video: ", label),
        Span::raw(payload),
    ]));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
