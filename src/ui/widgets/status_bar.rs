//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Height the status bar needs
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    build_status_bar_with_prefix(Vec::new(), hints)
}

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - STATUS_BAR_HEIGHT,
        width: area.width,
        height: STATUS_BAR_HEIGHT,
    })
}

/// Render the status bar with the screen's key hints, prefixed by the screen
/// title
pub fn render_status_bar(frame: &mut Frame, title: &str, accent: Color, hints: &[KeyHint]) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let prefix = vec![Span::styled(
        format!(" {title} "),
        Style::default()
            .fg(Color::Black)
            .bg(accent)
            .add_modifier(Modifier::BOLD),
    )];
    let status = build_status_bar_with_prefix(prefix, hints);
    frame.render_widget(Paragraph::new(status), status_area);
}
