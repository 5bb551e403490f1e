//! Font size slider widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::ui::symbols::slider;

/// Smallest selectable font size (sp)
pub const FONT_SIZE_MIN: u32 = 10;
/// Largest selectable font size (sp)
pub const FONT_SIZE_MAX: u32 = 50;

/// Width reserved right of the track for the value label (" 50 sp")
const LABEL_WIDTH: u16 = 6;

/// Column of the handle within a track of `track_width` cells.
///
/// `value` is clamped to `min..=max`.
pub fn handle_offset(value: u32, min: u32, max: u32, track_width: u16) -> u16 {
    if track_width == 0 || max <= min {
        return 0;
    }
    let value = value.clamp(min, max);
    let span = u64::from(track_width - 1);
    ((u64::from(value - min) * span) / u64::from(max - min)) as u16
}

#[derive(Debug, Clone)]
pub struct FontSizeSlider {
    value: u32,
    accent: Color,
    track: Color,
    focused: bool,
}

impl FontSizeSlider {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            accent: Color::Cyan,
            track: Color::DarkGray,
            focused: false,
        }
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    pub fn track(mut self, color: Color) -> Self {
        self.track = color;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for FontSizeSlider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width <= LABEL_WIDTH {
            return;
        }

        let track_width = area.width - LABEL_WIDTH;
        let handle = handle_offset(self.value, FONT_SIZE_MIN, FONT_SIZE_MAX, track_width);

        for x in 0..track_width {
            let (symbol, color) = if x < handle {
                (slider::FILLED, self.accent)
            } else {
                (slider::EMPTY, self.track)
            };
            buf[(area.x + x, area.y)]
                .set_char(symbol)
                .set_fg(color);
        }

        let mut handle_style = Style::default().fg(self.accent);
        if self.focused {
            handle_style = handle_style.add_modifier(Modifier::BOLD);
        }
        buf[(area.x + handle, area.y)]
            .set_char(slider::HANDLE)
            .set_style(handle_style);

        let label = format!("{:>3} sp", self.value.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX));
        buf.set_string(area.x + track_width, area.y, label, Style::default());
    }
}
