//! Rendering tests using ratatui's TestBackend
//!
//! Each test draws into an in-memory terminal and checks the text that lands
//! in the buffer.

mod common;

#[path = "ui/test_dialog.rs"]
mod test_dialog;

#[path = "ui/test_screens.rs"]
mod test_screens;

#[path = "ui/test_app.rs"]
mod test_app;

use ratatui::buffer::Buffer;

/// Buffer contents, one string per row with trailing spaces trimmed
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

/// Whole buffer as one newline-separated string
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer_lines(buffer).join("\n")
}
