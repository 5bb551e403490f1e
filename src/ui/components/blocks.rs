//! Block components for UI rendering
//!
//! Common block patterns used across screens.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with title and specified borders
pub fn titled_block<'a>(title: Line<'a>, borders: Borders) -> Block<'a> {
    Block::default().borders(borders).title(title)
}

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::ALL)
}

/// Screen frame: top rule carrying a bold title in the accent color
pub fn screen_block(title: &str, accent: Color) -> Block<'_> {
    let title = Line::styled(
        format!(" {title} "),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    );
    titled_block(title, Borders::TOP).border_style(Style::default().fg(accent))
}
