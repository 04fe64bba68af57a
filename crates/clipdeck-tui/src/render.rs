//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use clipdeck_core::navigator::{NavState, Screen};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;
use crate::features::{admin, analytics, auth, feed, notifications, profile, search};
use crate::overlays::OverlayExt;
use crate::overlays::render_utils::centered_rect;
use crate::state::{AppState, TuiState};

/// Height of the tab header.
const HEADER_HEIGHT: u16 = 1;

/// Height of the status line.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Ticks per spinner frame.
const SPINNER_SPEED_DIVISOR: usize = 6;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);

    render_header(state, frame, header_area);
    render_body(state, frame, body_area);
    render_status_line(state, frame, status_area);

    // Overlay last, so it appears on top
    app.overlay.render(frame, area, status_area.y);
}

fn render_header(state: &TuiState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(
        " clipdeck ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    let signed_in = matches!(state.nav, NavState::User | NavState::Admin);
    for (index, screen) in state.nav.screens().iter().enumerate() {
        let active = state.screen == Some(*screen);
        let style = if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::raw(" "));
        if signed_in {
            spans.push(Span::styled(
                format!("F{}:", index + 1),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::styled(tab_title(state, *screen), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if let Some(who) = identity_label(state) {
        let width = usize::from(area.width / 2);
        frame.render_widget(
            Paragraph::new(Span::styled(
                truncate_with_ellipsis(&who, width),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right),
            area,
        );
    }
}

fn tab_title(state: &TuiState, screen: Screen) -> String {
    match screen {
        Screen::Notifications => match state.notifications.unread_count() {
            0 => screen.title().to_string(),
            unread => format!("{} ({unread})", screen.title()),
        },
        _ => screen.title().to_string(),
    }
}

/// "name · role" for the header; flags a stored admin flag that the
/// token's role does not back.
fn identity_label(state: &TuiState) -> Option<String> {
    let role = match state.nav {
        NavState::User => "user",
        NavState::Admin => "admin",
        NavState::Loading | NavState::Unauthenticated => return None,
    };
    let name = state.display_name.as_deref().unwrap_or(profile::DEFAULT_NAME);
    let mismatch = if state.admin_flag != (state.nav == NavState::Admin) {
        " (stored flag differs)"
    } else {
        ""
    };
    Some(format!("{name} · {role}{mismatch} "))
}

fn render_body(state: &TuiState, frame: &mut Frame, area: Rect) {
    let Some(screen) = state.screen else {
        render_loading(frame, area);
        return;
    };

    if let Some(video) = &state.detail {
        feed::render_detail(frame, area, video, state.tasks.playback.is_running());
        return;
    }

    match screen {
        Screen::Login => auth::render_login(frame, area, &state.auth, state.tasks.login.is_running()),
        Screen::Signup => {
            auth::render_signup(frame, area, &state.auth, state.tasks.signup.is_running());
        }
        Screen::Home => feed::render_feed(frame, area, &state.feed, state.tasks.feed.is_running()),
        Screen::Search => search::render_search(
            frame,
            area,
            &state.search,
            state.tasks.video_lookup.is_running(),
        ),
        Screen::Notifications => {
            notifications::render_notifications(frame, area, &state.notifications);
        }
        Screen::Profile => profile::render_profile(frame, area, &state.profile, state.nav),
        Screen::Dashboard => admin::render_dashboard(frame, area, &state.admin, &state.tasks.upload),
        Screen::Analytics => analytics::render_analytics(frame, area, &state.feed),
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let center = centered_rect(40, 20, area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Loading…",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
        center,
    );
}

/// Renders the status line: running task, then message, then key hints.
fn render_status_line(state: &TuiState, frame: &mut Frame, area: Rect) {
    let spinner_idx = (state.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len();
    let spinner = SPINNER_FRAMES[spinner_idx];

    let spans: Vec<Span> = if let Some(label) = state.busy_label() {
        let mut spans = vec![
            Span::styled(spinner, Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(format!("{label}..."), Style::default().fg(Color::Yellow)),
        ];
        if state.tasks.upload.is_running() {
            spans.extend([
                Span::raw("  "),
                Span::styled("Esc", Style::default().fg(Color::DarkGray)),
                Span::raw(" to cancel"),
            ]);
        }
        spans
    } else if let Some(message) = &state.status {
        vec![Span::styled(
            message.clone(),
            Style::default().fg(Color::White),
        )]
    } else {
        let mut spans = Vec::new();
        match state.nav {
            NavState::User | NavState::Admin => spans.extend([
                Span::styled("F1-F4", Style::default().fg(Color::DarkGray)),
                Span::raw(" tabs  "),
            ]),
            NavState::Unauthenticated => spans.extend([
                Span::styled("Server", Style::default().fg(Color::DarkGray)),
                Span::raw(format!(" {}  ", state.api_url)),
            ]),
            NavState::Loading => {}
        }
        spans.extend([
            Span::styled("Ctrl+C", Style::default().fg(Color::DarkGray)),
            Span::raw(" quit"),
        ]);
        spans
    };

    let status = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(status, area);
}
