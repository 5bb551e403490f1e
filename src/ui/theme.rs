//! Color theme definitions
//!
//! Maps the live [`Theme`] onto terminal colors.

use ratatui::style::Color;

use crate::settings::{Palette, Theme, ThemeStyle};

/// Material 500 shade of a primary palette
pub fn palette_color(palette: Palette) -> Color {
    match palette {
        Palette::Red => Color::Rgb(0xF4, 0x43, 0x36),
        Palette::Pink => Color::Rgb(0xE9, 0x1E, 0x63),
        Palette::Purple => Color::Rgb(0x9C, 0x27, 0xB0),
        Palette::DeepPurple => Color::Rgb(0x67, 0x3A, 0xB7),
        Palette::Indigo => Color::Rgb(0x3F, 0x51, 0xB5),
        Palette::Blue => Color::Rgb(0x21, 0x96, 0xF3),
        Palette::LightBlue => Color::Rgb(0x03, 0xA9, 0xF4),
        Palette::Cyan => Color::Rgb(0x00, 0xBC, 0xD4),
        Palette::Teal => Color::Rgb(0x00, 0x96, 0x88),
        Palette::Green => Color::Rgb(0x4C, 0xAF, 0x50),
        Palette::LightGreen => Color::Rgb(0x8B, 0xC3, 0x4A),
        Palette::Lime => Color::Rgb(0xCD, 0xDC, 0x39),
        Palette::Yellow => Color::Rgb(0xFF, 0xEB, 0x3B),
        Palette::Amber => Color::Rgb(0xFF, 0xC1, 0x07),
        Palette::Orange => Color::Rgb(0xFF, 0x98, 0x00),
        Palette::DeepOrange => Color::Rgb(0xFF, 0x57, 0x22),
        Palette::Brown => Color::Rgb(0x79, 0x55, 0x48),
        Palette::Gray => Color::Rgb(0x9E, 0x9E, 0x9E),
        Palette::BlueGray => Color::Rgb(0x60, 0x7D, 0x8B),
    }
}

/// Resolved colors for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub primary: Color,
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    /// Notebook rules and slider track
    pub rule: Color,
    /// Selected row background
    pub selected_bg: Color,
}

impl Colors {
    pub fn from_theme(theme: &Theme) -> Self {
        let primary = palette_color(theme.palette);
        match theme.style {
            ThemeStyle::Light => Self {
                primary,
                background: Color::Rgb(0xFA, 0xFA, 0xFA),
                text: Color::Rgb(0x21, 0x21, 0x21),
                muted: Color::Rgb(0x75, 0x75, 0x75),
                rule: Color::Rgb(0xBB, 0xDE, 0xFB),
                selected_bg: Color::Rgb(0xE0, 0xE0, 0xE0),
            },
            ThemeStyle::Dark => Self {
                primary,
                background: Color::Rgb(0x12, 0x12, 0x12),
                text: Color::Rgb(0xEE, 0xEE, 0xEE),
                muted: Color::Rgb(0x9E, 0x9E, 0x9E),
                rule: Color::Rgb(0x37, 0x47, 0x4F),
                selected_bg: Color::Rgb(0x33, 0x33, 0x33),
            },
        }
    }
}
