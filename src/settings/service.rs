//! Settings service
//!
//! Loads the merged settings, pushes them into the live theme, persists every
//! change and manages font packages. The live theme is passed into each call
//! that needs it; without one those calls do nothing.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use super::fonts::{self, DEFAULT_FONT, DeleteOutcome};
use super::registry::{self, FontRegistry};
use super::store::{self, BUILTIN_DEFAULTS, Layer, Settings};
use super::theme::{Palette, Theme, ThemeStyle};
use super::SettingsError;
use crate::config::AppPaths;
use crate::model::Notification;

/// Owner of the settings files and the font registry
#[derive(Debug)]
pub struct SettingsService {
    paths: AppPaths,
    settings: Settings,
    fonts: FontRegistry,
}

impl SettingsService {
    /// Create a service with empty settings; nothing is read until
    /// [`SettingsService::reload`]
    pub fn new(paths: AppPaths) -> Self {
        Self {
            paths,
            settings: Settings::default(),
            fonts: FontRegistry::new(),
        }
    }

    /// Create a service and load everything from disk
    pub fn load(paths: AppPaths, theme: Option<&mut Theme>) -> Self {
        let mut service = Self::new(paths);
        service.reload(theme);
        service
    }

    /// Re-read both settings layers, register fonts and apply the result to
    /// `theme`.
    ///
    /// Loading never writes the user file.
    pub fn reload(&mut self, theme: Option<&mut Theme>) {
        let defaults = self.read_defaults();
        let user = store::read_layer(&self.paths.user_settings);
        self.settings = Settings::from_layers(defaults, user);
        self.register_fonts();

        if let Some(theme) = theme {
            theme.style = self.settings.effective_theme_style();
            theme.palette = self.settings.effective_palette();
            if let Some(name) = self.settings.font_name.as_deref().filter(|n| !n.is_empty()) {
                theme.set_font_name(name);
            }
            if let Some(size) = self.settings.font_size.filter(|s| is_valid_size(*s)) {
                theme.set_body_font_size(size);
            }
        }

        debug!(settings = ?self.settings, "settings loaded");
    }

    fn read_defaults(&self) -> Layer {
        if self.paths.default_settings.exists() {
            return store::read_layer(&self.paths.default_settings);
        }
        store::parse_layer(BUILTIN_DEFAULTS, Path::new("<builtin>")).unwrap_or_else(|e| {
            warn!(error = %e, "built-in defaults are invalid");
            Layer::new()
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Override the given keys, push the effective style and palette into
    /// `theme` and persist.
    pub fn apply_theme(
        &mut self,
        theme: Option<&mut Theme>,
        style: Option<ThemeStyle>,
        palette: Option<Palette>,
    ) -> Result<(), SettingsError> {
        let Some(theme) = theme else {
            return Ok(());
        };

        if let Some(style) = style {
            self.settings.theme_style = Some(style);
        }
        if let Some(palette) = palette {
            self.settings.primary_palette = Some(palette);
        }
        theme.style = self.settings.effective_theme_style();
        theme.palette = self.settings.effective_palette();

        self.save()
    }

    /// Apply `font_name` (or the stored font when `None`) to every text style
    /// category except icons, and persist.
    pub fn apply_font(
        &mut self,
        theme: Option<&mut Theme>,
        font_name: Option<&str>,
    ) -> Result<(), SettingsError> {
        let Some(theme) = theme else {
            return Ok(());
        };
        let name = font_name
            .map(fonts::storage_name)
            .or_else(|| self.settings.font_name.clone())
            .filter(|n| !n.is_empty());
        let Some(name) = name else {
            return Ok(());
        };

        theme.set_font_name(&name);
        self.settings.font_name = Some(name);
        self.save()
    }

    /// Apply `size` in sp (or the stored size when `None`) to body text, and
    /// persist.
    pub fn apply_font_size(
        &mut self,
        theme: Option<&mut Theme>,
        size: Option<f32>,
    ) -> Result<(), SettingsError> {
        let Some(theme) = theme else {
            return Ok(());
        };
        let Some(size) = size.or(self.settings.font_size).filter(|s| is_valid_size(*s)) else {
            return Ok(());
        };

        theme.set_body_font_size(size);
        self.settings.font_size = Some(size);
        self.save()
    }

    /// Body text size of `theme` in sp
    pub fn get_current_font_size(&self, theme: &Theme) -> Option<u32> {
        theme.body_font_size()
    }

    /// Display names of installed font packages
    pub fn get_fonts(&self) -> Vec<String> {
        fonts::list_packages(&self.paths.fonts_dir).unwrap_or_else(|e| {
            warn!(error = %e, "failed to list font packages");
            Vec::new()
        })
    }

    /// Fonts offered to the user: the built-in font, then installed packages
    pub fn font_choices(&self) -> Vec<String> {
        let mut choices = vec![DEFAULT_FONT.to_string()];
        choices.extend(self.get_fonts().into_iter().filter(|n| n != DEFAULT_FONT));
        choices
    }

    /// Install the font package in `zip_path`
    pub fn extract_font_zip(&mut self, zip_path: &Path) -> Notification {
        match fonts::extract_package(&self.paths.fonts_dir, zip_path) {
            Ok(name) => {
                info!(font = %name, archive = %zip_path.display(), "font package added");
                self.register_fonts();
                Notification::success(format!("Font successfully added: {name}"))
            }
            Err(e) => {
                warn!(archive = %zip_path.display(), error = %e, "font package rejected");
                e.into_notification()
            }
        }
    }

    /// Delete every font package. On full success the font falls back to
    /// [`DEFAULT_FONT`].
    pub fn delete_all_fonts(&mut self, theme: Option<&mut Theme>) -> Notification {
        self.delete_all_fonts_with(theme, |dir| fs::remove_dir_all(dir))
    }

    /// [`SettingsService::delete_all_fonts`] with a custom `remove` for each
    /// package directory
    pub fn delete_all_fonts_with<F>(
        &mut self,
        theme: Option<&mut Theme>,
        remove: F,
    ) -> Notification
    where
        F: FnMut(&Path) -> io::Result<()>,
    {
        let outcome = match fonts::delete_all_packages_with(&self.paths.fonts_dir, remove) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "failed to delete font packages");
                return Notification::warning(format!("Failed to delete fonts: {e}"));
            }
        };

        match outcome {
            DeleteOutcome::RootMissing => Notification::info("Font directory not found."),
            DeleteOutcome::Empty => Notification::info("No fonts to delete."),
            DeleteOutcome::Deleted { count, failed } if !failed.is_empty() => {
                // The font setting stays, but removed packages leave the registry
                self.register_fonts();
                Notification::warning(format!(
                    "Deleted {count} fonts. Failed: {}",
                    failed.join(", ")
                ))
            }
            DeleteOutcome::Deleted { count, .. } => {
                info!(count, "font packages deleted");
                if let Err(e) = self.apply_font(theme, Some(DEFAULT_FONT)) {
                    warn!(error = %e, "failed to persist font reset");
                }
                self.register_fonts();
                Notification::success(format!("Deleted {count} fonts successfully."))
            }
        }
    }

    /// Rebuild the font registry from the fonts root. Returns the number of
    /// registered families.
    pub fn register_fonts(&mut self) -> usize {
        self.fonts = registry::scan_fonts_root(&self.paths.fonts_dir).unwrap_or_else(|e| {
            warn!(error = %e, "failed to scan fonts directory");
            FontRegistry::new()
        });
        debug!(families = self.fonts.len(), "fonts registered");
        self.fonts.len()
    }

    /// Write the whole settings map to the user file
    pub fn save(&self) -> Result<(), SettingsError> {
        self.settings.save(&self.paths.user_settings).inspect_err(|e| {
            warn!(path = %self.paths.user_settings.display(), error = %e, "failed to save settings");
        })
    }
}

fn is_valid_size(size: f32) -> bool {
    size.is_finite() && size > 0.0
}
