//! Input dialog key handling and rendering

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use tui_textarea::TextArea;

use super::{Dialog, DialogResult, centered_rect};

/// Entered text with surrounding whitespace and one pair of matching quotes
/// removed (paths dragged into a terminal are often quoted)
pub(super) fn normalize_input(raw: &str) -> String {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.to_string();
        }
    }
    trimmed.to_string()
}

impl Dialog {
    pub(super) fn handle_input_key(
        textarea: &mut TextArea<'static>,
        key: KeyEvent,
    ) -> Option<DialogResult> {
        match key.code {
            KeyCode::Enter => {
                let value = normalize_input(&textarea.lines().join(""));
                if value.is_empty() {
                    Some(DialogResult::Cancelled)
                } else {
                    Some(DialogResult::Confirmed(vec![value]))
                }
            }
            KeyCode::Esc => Some(DialogResult::Cancelled),
            _ => {
                textarea.input(key);
                None
            }
        }
    }

    pub(super) fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        prompt: &str,
        textarea: &TextArea<'static>,
    ) {
        let width = 60.min(area.width.saturating_sub(4));
        let dialog_area = centered_rect(width, 7.min(area.height), area);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let [prompt_area, field_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Length(3)]).areas(inner);

        frame.render_widget(Paragraph::new(Line::from(prompt)), prompt_area);

        let mut field = textarea.clone();
        field.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(&field, field_area);
    }
}
