//! Notification and error banners
//!
//! One-line banners drawn above the bottom chrome (navigation bar and status
//! bar). Errors take precedence over notifications.

use ratatui::{prelude::*, text::Line, widgets::Paragraph};

use crate::model::{Notification, NotificationKind};

/// Rectangle of a banner sitting `bottom_offset` rows above the bottom edge
fn banner_area(area: Rect, bottom_offset: u16) -> Option<Rect> {
    if area.height <= bottom_offset || area.width < 4 {
        return None;
    }
    Some(Rect {
        x: area.x + 2,
        y: area.y + area.height - bottom_offset - 1,
        width: area.width - 4,
        height: 1,
    })
}

/// Render a notification banner `bottom_offset` rows above the bottom edge
pub fn render_notification_banner(frame: &mut Frame, notification: &Notification, bottom_offset: u16) {
    let Some(area) = banner_area(frame.area(), bottom_offset) else {
        return;
    };
    let line = build_notification_line(notification);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render an error banner `bottom_offset` rows above the bottom edge
pub fn render_error_banner(frame: &mut Frame, error: &str, bottom_offset: u16) {
    let Some(area) = banner_area(frame.area(), bottom_offset) else {
        return;
    };
    frame.render_widget(Paragraph::new(build_error_line(error)), area);
}

/// Build a styled line for the notification
pub fn build_notification_line(notification: &Notification) -> Line<'static> {
    let (label, label_bg, text_fg) = match notification.kind {
        NotificationKind::Success => (" Success: ", Color::Green, Color::Green),
        NotificationKind::Info => (" Info: ", Color::Cyan, Color::Cyan),
        NotificationKind::Warning => (" Warning: ", Color::Yellow, Color::Yellow),
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Black).bg(label_bg)),
        Span::styled(
            format!(" {} ", notification.message),
            Style::default().fg(text_fg),
        ),
    ])
}

/// Build an error line: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}
