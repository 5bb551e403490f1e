//! Theme & Style screen rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Row, ThemeStyleScreen};
use crate::settings::{Theme, ThemeStyle};
use crate::ui::components;
use crate::ui::symbols::markers;
use crate::ui::theme::{Colors, palette_color};
use crate::ui::widgets::{FontSizeSlider, NotebookText, line_spacing_for};

const LABEL_WIDTH: u16 = 24;

const PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog. \
    Entries are written on ruled lines that widen with the font size.";

impl ThemeStyleScreen {
    /// Render the settings rows, a preview below them and the open dialog
    /// on top
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, font_label: &str) {
        let colors = Colors::from_theme(theme);
        let block = components::screen_block("Theme & Style", colors.primary);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [rows_area, _, preview_area] = Layout::vertical([
            Constraint::Length(Row::ALL.len() as u16),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let font_size = theme.body_font_size().unwrap_or(16);
        let selected = self.selected_row();

        for (index, row) in Row::ALL.iter().enumerate() {
            let row_area = Rect {
                y: rows_area.y + index as u16,
                height: 1,
                ..rows_area
            };
            if row_area.y >= rows_area.bottom() {
                break;
            }
            let [label_area, value_area] =
                Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
                    .areas(row_area);

            let is_selected = *row == selected;
            frame.render_widget(Paragraph::new(label_line(*row, is_selected, &colors)), label_area);

            match row {
                Row::FontSize => {
                    let slider = FontSizeSlider::new(font_size)
                        .accent(colors.primary)
                        .track(colors.muted)
                        .focused(is_selected);
                    frame.render_widget(slider, value_area);
                }
                _ => {
                    let value = value_line(*row, theme, font_label, &colors);
                    frame.render_widget(Paragraph::new(value), value_area);
                }
            }
        }

        let preview = NotebookText::new(PREVIEW_TEXT)
            .line_spacing(line_spacing_for(font_size))
            .text_color(colors.text)
            .rule_color(colors.rule);
        frame.render_widget(preview, preview_area);

        if let Some(dialog) = &self.dialog {
            dialog.render(frame, area);
        }
    }
}

fn label_line(row: Row, is_selected: bool, colors: &Colors) -> Line<'static> {
    if is_selected {
        Line::from(vec![
            Span::styled(
                format!(" {} ", markers::SELECTED),
                Style::default().fg(colors.primary),
            ),
            Span::styled(
                row.label(),
                Style::default()
                    .fg(colors.text)
                    .bg(colors.selected_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw("   "),
            Span::styled(row.label(), Style::default().fg(colors.text)),
        ])
    }
}

fn value_line(row: Row, theme: &Theme, font_label: &str, colors: &Colors) -> Line<'static> {
    match row {
        Row::DarkTheme => {
            let toggle = if theme.style == ThemeStyle::Dark {
                markers::TOGGLE_ON
            } else {
                markers::TOGGLE_OFF
            };
            Line::styled(toggle, Style::default().fg(colors.primary))
        }
        Row::Palette => Line::from(vec![
            Span::styled(
                markers::SWATCH.to_string(),
                Style::default().fg(palette_color(theme.palette)),
            ),
            Span::styled(
                format!(" {}", theme.palette.name()),
                Style::default().fg(colors.text),
            ),
        ]),
        Row::Font => Line::styled(font_label.to_string(), Style::default().fg(colors.text)),
        Row::FontSize | Row::UploadFont | Row::DeleteFonts => Line::default(),
    }
}
