//! Settings and font management
//!
//! This module owns the persisted settings, the live theme they drive and the
//! user-uploaded font packages.

pub mod fonts;
mod registry;
mod service;
mod store;
mod theme;

pub use fonts::{DEFAULT_FONT, DeleteOutcome, FontVariant};
pub use registry::{FontFamily, FontRegistry, classify, scan_fonts_root};
pub use service::SettingsService;
pub use store::{BUILTIN_DEFAULTS, Layer, Settings, merge_layers, parse_layer, read_layer};
pub use theme::{
    BODY_STYLE, FontSpec, FontStyle, ICON_STYLE, Palette, SizeVariant, Theme, ThemeStyle,
};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::Notification;

/// Errors raised while reading or writing settings files
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while extracting a font package
#[derive(Error, Debug)]
pub enum FontError {
    #[error("Invalid ZIP file")]
    InvalidArchive,

    #[error("No font files found in ZIP")]
    NoFontFiles,

    #[error("Missing required file: *-Regular.ttf")]
    MissingRegular,

    #[error("{0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("{0}")]
    Walk(#[from] walkdir::Error),

    #[error("{0}")]
    Io(#[from] io::Error),
}

impl FontError {
    /// Whether the archive itself was rejected (as opposed to a fault while
    /// processing it)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FontError::InvalidArchive | FontError::NoFontFiles | FontError::MissingRegular
        )
    }

    /// Status shown to the user
    pub fn into_notification(self) -> Notification {
        if self.is_validation() {
            Notification::warning(self.to_string())
        } else {
            Notification::warning(format!("Font extraction failed: {self}"))
        }
    }
}
