//! Empty state components
//!
//! Display messages when a screen has no content to show.

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Create a centered empty state display
///
/// # Arguments
/// * `title` - Main message to display
/// * `hint` - Optional hint text (displayed in gray)
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    lines.push(Line::from(""));

    Paragraph::new(lines)
}

/// Shown for menu entries whose feature is not part of this build
pub fn unavailable_state(feature: &str) -> Paragraph<'static> {
    empty_state(
        &format!("{feature} is not available yet."),
        Some("Diary entries arrive in a later version."),
    )
}
