//! Live theme context
//!
//! The theme is what the UI reads when drawing: light/dark style, primary
//! palette and the font assignments of every text style category. The
//! settings service writes into it; nothing else mutates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::fonts::DEFAULT_FONT;

/// Text style category holding icon glyphs; fonts are never applied to it
pub const ICON_STYLE: &str = "Icon";

/// Text style category whose large variant carries the user's font size
pub const BODY_STYLE: &str = "Body";

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeStyle {
    #[default]
    Light,
    Dark,
}

impl ThemeStyle {
    pub fn toggled(self) -> Self {
        match self {
            ThemeStyle::Light => ThemeStyle::Dark,
            ThemeStyle::Dark => ThemeStyle::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeStyle::Light => "Light",
            ThemeStyle::Dark => "Dark",
        }
    }
}

/// Primary color palettes (Material color names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Palette {
    Red,
    Pink,
    Purple,
    DeepPurple,
    Indigo,
    #[default]
    Blue,
    LightBlue,
    Cyan,
    Teal,
    Green,
    LightGreen,
    Lime,
    Yellow,
    Amber,
    Orange,
    DeepOrange,
    Brown,
    Gray,
    BlueGray,
}

impl Palette {
    pub const ALL: [Palette; 19] = [
        Palette::Red,
        Palette::Pink,
        Palette::Purple,
        Palette::DeepPurple,
        Palette::Indigo,
        Palette::Blue,
        Palette::LightBlue,
        Palette::Cyan,
        Palette::Teal,
        Palette::Green,
        Palette::LightGreen,
        Palette::Lime,
        Palette::Yellow,
        Palette::Amber,
        Palette::Orange,
        Palette::DeepOrange,
        Palette::Brown,
        Palette::Gray,
        Palette::BlueGray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Palette::Red => "Red",
            Palette::Pink => "Pink",
            Palette::Purple => "Purple",
            Palette::DeepPurple => "DeepPurple",
            Palette::Indigo => "Indigo",
            Palette::Blue => "Blue",
            Palette::LightBlue => "LightBlue",
            Palette::Cyan => "Cyan",
            Palette::Teal => "Teal",
            Palette::Green => "Green",
            Palette::LightGreen => "LightGreen",
            Palette::Lime => "Lime",
            Palette::Yellow => "Yellow",
            Palette::Amber => "Amber",
            Palette::Orange => "Orange",
            Palette::DeepOrange => "DeepOrange",
            Palette::Brown => "Brown",
            Palette::Gray => "Gray",
            Palette::BlueGray => "BlueGray",
        }
    }

    /// Next palette in [`Palette::ALL`], wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Size variant of a text style category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeVariant {
    Large,
    Medium,
    Small,
}

/// Font assignment of one size variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub font_name: String,
    /// Size in scaled pixels
    pub font_size: u32,
}

/// A text style category (Body, Title, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStyle {
    pub font_name: String,
    pub variants: BTreeMap<SizeVariant, FontSpec>,
}

/// Material type scale: (category, [large, medium, small]) in sp
const TYPE_SCALE: [(&str, [u32; 3]); 6] = [
    ("Display", [57, 45, 36]),
    ("Headline", [32, 28, 24]),
    ("Title", [22, 16, 14]),
    (BODY_STYLE, [16, 14, 12]),
    ("Label", [14, 12, 11]),
    (ICON_STYLE, [24, 24, 24]),
];

/// The live theme of the running application
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub style: ThemeStyle,
    pub palette: Palette,
    pub font_styles: BTreeMap<String, FontStyle>,
    /// Pixels per sp
    sp_scale: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Theme {
    /// Build the stock theme for a display with the given sp scale.
    ///
    /// A non-positive scale falls back to 1.0.
    pub fn new(sp_scale: f32) -> Self {
        let sp_scale = if sp_scale > 0.0 { sp_scale } else { 1.0 };
        let mut theme = Self {
            style: ThemeStyle::default(),
            palette: Palette::default(),
            font_styles: BTreeMap::new(),
            sp_scale,
        };

        for (category, [large, medium, small]) in TYPE_SCALE {
            let variants = [
                (SizeVariant::Large, large),
                (SizeVariant::Medium, medium),
                (SizeVariant::Small, small),
            ]
            .into_iter()
            .map(|(variant, size)| {
                let spec = FontSpec {
                    font_name: DEFAULT_FONT.to_string(),
                    font_size: theme.sp(size as f32),
                };
                (variant, spec)
            })
            .collect();

            theme.font_styles.insert(
                category.to_string(),
                FontStyle {
                    font_name: DEFAULT_FONT.to_string(),
                    variants,
                },
            );
        }

        theme
    }

    pub fn sp_scale(&self) -> f32 {
        self.sp_scale
    }

    /// Convert sp to whole scaled pixels (truncating)
    pub fn sp(&self, value: f32) -> u32 {
        (value * self.sp_scale) as u32
    }

    /// Assign `font_name` to every category except [`ICON_STYLE`], at the
    /// top level and in every size variant.
    pub fn set_font_name(&mut self, font_name: &str) {
        for (category, style) in self.font_styles.iter_mut() {
            if category == ICON_STYLE {
                continue;
            }
            style.font_name = font_name.to_string();
            for spec in style.variants.values_mut() {
                spec.font_name = font_name.to_string();
            }
        }
    }

    pub fn font_name(&self, category: &str, variant: SizeVariant) -> Option<&str> {
        self.font_styles
            .get(category)?
            .variants
            .get(&variant)
            .map(|spec| spec.font_name.as_str())
    }

    /// Set the body text size (Body / large), given in sp
    pub fn set_body_font_size(&mut self, size: f32) {
        let pixels = self.sp(size);
        if let Some(spec) = self
            .font_styles
            .get_mut(BODY_STYLE)
            .and_then(|style| style.variants.get_mut(&SizeVariant::Large))
        {
            spec.font_size = pixels;
        }
    }

    /// Body text size converted back to sp (truncating)
    pub fn body_font_size(&self) -> Option<u32> {
        let spec = self
            .font_styles
            .get(BODY_STYLE)?
            .variants
            .get(&SizeVariant::Large)?;
        Some((spec.font_size as f32 / self.sp_scale) as u32)
    }
}
