use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{AuthState, LoginField, SignupField};
use crate::overlays::render_utils::{button_line, error_line, field_lines};

const ACCENT: Color = Color::Cyan;
const FORM_WIDTH: u16 = 44;

fn form_area(area: Rect, height: u16) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

fn render_form(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let target = form_area(area, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left),
        target,
    );
}

fn link_line(prefix: &str, label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };
    Line::from(vec![
        Span::styled(prefix.to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled(label.to_string(), style),
    ])
}

pub fn render_login(frame: &mut Frame, area: Rect, auth: &AuthState, busy: bool) {
    let focus = auth.login_focus;
    let mut lines = Vec::new();
    lines.extend(field_lines(
        "Username",
        &auth.login.username,
        focus == LoginField::Username,
        false,
        ACCENT,
    ));
    lines.push(Line::default());
    lines.extend(field_lines(
        "Password",
        &auth.login.password,
        focus == LoginField::Password,
        true,
        ACCENT,
    ));
    lines.push(Line::default());
    lines.push(button_line(
        if busy { "Logging in..." } else { "Log In" },
        focus == LoginField::Submit,
        ACCENT,
    ));
    lines.push(error_line(auth.login_error.as_deref()));
    lines.push(link_line(
        "Don't have an account? ",
        "Sign Up",
        focus == LoginField::SignupLink,
    ));

    render_form(frame, area, "Log In", lines);
}

pub fn render_signup(frame: &mut Frame, area: Rect, auth: &AuthState, busy: bool) {
    let focus = auth.signup_focus;
    let mut lines = Vec::new();
    lines.extend(field_lines(
        "Username",
        &auth.signup.username,
        focus == SignupField::Username,
        false,
        ACCENT,
    ));
    lines.push(Line::default());
    lines.extend(field_lines(
        "Password",
        &auth.signup.password,
        focus == SignupField::Password,
        true,
        ACCENT,
    ));
    lines.push(Line::default());
    lines.extend(field_lines(
        "Confirm Password",
        &auth.signup.confirm_password,
        focus == SignupField::Confirm,
        true,
        ACCENT,
    ));
    lines.push(Line::default());
    lines.push(button_line(
        if busy { "Creating account..." } else { "Sign Up" },
        focus == SignupField::Submit,
        ACCENT,
    ));
    lines.push(error_line(auth.signup_error.as_deref()));
    lines.push(link_line(
        "Already have an account? ",
        "Log In",
        focus == SignupField::LoginLink,
    ));

    render_form(frame, area, "Sign Up", lines);
}
