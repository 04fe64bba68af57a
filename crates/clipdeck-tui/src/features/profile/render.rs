use clipdeck_core::navigator::NavState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::state::{ProfileField, ProfileRow, ProfileState};
use crate::overlays::render_utils::field_lines;

pub fn render_profile(frame: &mut Frame, area: Rect, profile: &ProfileState, nav: NavState) {
    let [card_area, rows_area] =
        Layout::vertical([Constraint::Length(7), Constraint::Min(3)]).areas(area);

    let role = match nav {
        NavState::Admin => "Administrator",
        _ => "Viewer",
    };
    let avatar = match &profile.avatar {
        Some(asset) => format!("[{}]", asset.file_name),
        None => format!("({})", profile.initials()),
    };

    let card_lines = match profile.editing {
        Some(field) => {
            let label = match field {
                ProfileField::Name => "Name",
                ProfileField::Bio => "Bio",
            };
            let mut lines = field_lines(label, &profile.draft, true, false, Color::Cyan);
            lines.push(Line::from(Span::styled(
                "Enter save • Esc cancel",
                Style::default().fg(Color::DarkGray),
            )));
            lines
        }
        None => vec![
            Line::from(vec![
                Span::styled(format!("{avatar} "), Style::default().fg(Color::Cyan)),
                Span::styled(
                    profile.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(role, Style::default().fg(Color::DarkGray))),
            Line::default(),
            Line::from(Span::styled(
                profile.bio.clone(),
                Style::default().fg(Color::Gray),
            )),
        ],
    };
    let card = Paragraph::new(card_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Profile "),
    );
    frame.render_widget(card, card_area);

    let items: Vec<ListItem> = ProfileRow::rows_for(nav)
        .into_iter()
        .map(|row| {
            let style = if row == ProfileRow::LogOut {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(row.label(), style)))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Settings "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("› ");
    let mut state = ListState::default().with_selected(Some(profile.selected));
    frame.render_stateful_widget(list, rows_area, &mut state);
}
