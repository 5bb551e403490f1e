//! Ruled notebook text widget
//!
//! Text sits on ruled lines like a paper notebook. Larger body font sizes
//! spread the rules further apart.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Rows per ruled line for a body font size (sp): 1 up to 23 sp, 2 up to
/// 37 sp, 3 above
pub fn line_spacing_for(font_size: u32) -> u16 {
    (1 + font_size.saturating_sub(10) / 14).min(3) as u16
}

/// Word-wrap `text` to `width` columns. Explicit newlines are kept; words
/// longer than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 { word.len() } else { word.len() + 1 };
            if current_len + needed > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        lines.push(current);
    }
    lines
}

#[derive(Debug, Clone)]
pub struct NotebookText<'a> {
    text: &'a str,
    line_spacing: u16,
    text_color: Color,
    rule_color: Color,
}

impl<'a> NotebookText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            line_spacing: 1,
            text_color: Color::Reset,
            rule_color: Color::DarkGray,
        }
    }

    pub fn line_spacing(mut self, spacing: u16) -> Self {
        self.line_spacing = spacing.max(1);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn rule_color(mut self, color: Color) -> Self {
        self.rule_color = color;
        self
    }
}

impl Widget for NotebookText<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let rule_style = Style::default()
            .fg(self.rule_color)
            .add_modifier(Modifier::UNDERLINED);
        let text_style = rule_style.fg(self.text_color);

        let lines = wrap(self.text, area.width as usize);
        let slots = area.height / self.line_spacing;

        // Every slot is ruled on its last row; text sits on the rule
        for slot in 0..slots {
            let y = area.y + slot * self.line_spacing + self.line_spacing - 1;
            let blank = " ".repeat(area.width as usize);
            buf.set_string(area.x, y, blank, rule_style);
            if let Some(line) = lines.get(slot as usize) {
                buf.set_string(area.x, y, line, text_style);
            }
        }
    }
}
