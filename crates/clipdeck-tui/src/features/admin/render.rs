use clipdeck_core::media::MediaAsset;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{AdminField, AdminState};
use crate::common::{TaskMeta, TaskState};
use crate::overlays::render_utils::{button_line, field_lines};

const ACCENT: Color = Color::Magenta;

fn file_line(label: &str, asset: Option<&MediaAsset>, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let (text, style) = match asset {
        Some(asset) => (
            format!("{} ({})", asset.file_name, asset.size_label()),
            Style::default().fg(Color::Green),
        ),
        None => (
            format!("No {} selected", label.to_lowercase()),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(format!("{label}: "), label_style),
        Span::styled(text, style),
    ])
}

pub fn render_dashboard(frame: &mut Frame, area: Rect, admin: &AdminState, upload: &TaskState) {
    let focus = admin.focus;
    let mut lines = Vec::new();
    lines.extend(field_lines(
        "Title *",
        &admin.form.title,
        focus == AdminField::Title,
        false,
        ACCENT,
    ));
    lines.extend(field_lines(
        "Description",
        &admin.form.description,
        focus == AdminField::Description,
        false,
        ACCENT,
    ));
    lines.push(Line::default());
    lines.push(file_line(
        "Video",
        admin.form.video.as_ref(),
        focus == AdminField::Video,
    ));
    lines.push(file_line(
        "Thumbnail",
        admin.form.thumbnail.as_ref(),
        focus == AdminField::Thumbnail,
    ));
    lines.push(Line::default());

    let upload_label = match &upload.meta {
        TaskMeta::Upload { title } if upload.is_running() => {
            format!("Uploading \"{title}\"… (Esc to cancel)")
        }
        _ => "Upload Video".to_string(),
    };
    lines.push(button_line(
        &upload_label,
        focus == AdminField::Upload,
        ACCENT,
    ));
    lines.push(Line::default());
    lines.push(button_line("Log Out", focus == AdminField::Logout, Color::Red));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Upload a video ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Cell;

    use super::*;
    use crate::common::{TaskId, TaskStarted};

    fn draw(admin: &AdminState, upload: &TaskState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|f| render_dashboard(f, f.area(), admin, upload))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(Cell::symbol)
            .collect()
    }

    #[test]
    fn test_empty_form_shows_placeholders() {
        let text = draw(&AdminState::default(), &TaskState::default());
        assert!(text.contains("No video selected"));
        assert!(text.contains("No thumbnail selected"));
        assert!(text.contains("Upload Video"));
    }

    #[test]
    fn test_running_upload_shows_title() {
        let mut upload = TaskState::default();
        upload.on_started(&TaskStarted {
            id: TaskId(1),
            cancel: None,
            meta: TaskMeta::Upload {
                title: "Launch".to_string(),
            },
        });
        let text = draw(&AdminState::default(), &upload);
        assert!(text.contains("Uploading \"Launch\""));
    }
}
