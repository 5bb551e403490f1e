//! Confirm dialog input handling and rendering

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{Dialog, DialogResult, centered_rect};

const CONFIRM_WIDTH: u16 = 50;

impl Dialog {
    pub(super) fn handle_confirm_key(key: KeyEvent) -> Option<DialogResult> {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(DialogResult::Confirmed(vec![])),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(DialogResult::Cancelled),
            _ => None,
        }
    }

    /// Question, optional warning and the two choices, boxed in the
    /// destructive-action color
    pub(super) fn render_confirm(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        message: &str,
        detail: Option<&str>,
    ) {
        let mut lines = vec![Line::from(message.to_string()).bold(), Line::default()];
        if let Some(detail) = detail {
            lines.push(Line::from(detail.to_string()).yellow());
            lines.push(Line::default());
        }
        lines.push(choices_line());

        // Borders plus one blank row above the content
        let height = lines.len() as u16 + 3;
        let width = CONFIRM_WIDTH.min(area.width.saturating_sub(4));
        let dialog_area = centered_rect(width, height.min(area.height), area);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        let mut content = vec![Line::default()];
        content.extend(lines);
        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, dialog_area);
    }
}

fn choices_line() -> Line<'static> {
    Line::from(vec![
        Span::raw("[y]").green().bold(),
        Span::raw(" Yes     "),
        Span::raw("[n]").red().bold(),
        Span::raw(" No"),
    ])
}
