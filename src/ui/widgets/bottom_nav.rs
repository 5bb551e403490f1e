//! Bottom navigation bar widget
//!
//! Two rows: a rule with an indicator above the active tab, then the tab
//! labels, each centered in an equal share of the width.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::ui::symbols::rules;

/// Height the bar needs
pub const BOTTOM_NAV_HEIGHT: u16 = 2;

#[derive(Debug, Clone)]
pub struct BottomNavBar<'a> {
    labels: &'a [&'a str],
    selected: usize,
    accent: Color,
    muted: Color,
}

impl<'a> BottomNavBar<'a> {
    pub fn new(labels: &'a [&'a str], selected: usize) -> Self {
        Self {
            labels,
            selected,
            accent: Color::Cyan,
            muted: Color::DarkGray,
        }
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    pub fn muted(mut self, color: Color) -> Self {
        self.muted = color;
        self
    }
}

/// Split `area` into one equal column per item
pub fn item_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = (0..count).map(|_| Constraint::Ratio(1, count as u32));
    Layout::horizontal(constraints).split(area).to_vec()
}

impl Widget for BottomNavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < BOTTOM_NAV_HEIGHT || self.labels.is_empty() {
            return;
        }

        let rule_row = Rect { height: 1, ..area };
        let label_row = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };

        let rule = rules::HORIZONTAL.to_string().repeat(area.width as usize);
        buf.set_string(rule_row.x, rule_row.y, rule, Style::default().fg(self.muted));

        for (index, (label, column)) in self
            .labels
            .iter()
            .zip(item_areas(label_row, self.labels.len()))
            .enumerate()
        {
            let style = if index == self.selected {
                let indicator = rules::TAB_INDICATOR
                    .to_string()
                    .repeat(column.width as usize);
                buf.set_string(column.x, rule_row.y, indicator, Style::default().fg(self.accent));
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.muted)
            };

            Paragraph::new(Line::styled(*label, style))
                .alignment(Alignment::Center)
                .render(column, buf);
        }
    }
}
