//! Carrying out screen actions

use tracing::info;

use super::state::App;
use crate::model::Notification;
use crate::router::ScreenId;
use crate::settings::{DEFAULT_FONT, SettingsError, fonts};
use crate::ui::navigation;
use crate::ui::views::{MainAction, ThemeStyleAction};
use crate::ui::widgets::{FONT_SIZE_MAX, FONT_SIZE_MIN};

/// Body size assumed when the theme has none
const FALLBACK_FONT_SIZE: u32 = 16;

impl App {
    pub(crate) fn handle_main_action(&mut self, action: MainAction) {
        match action {
            MainAction::None => {}
            MainAction::OpenThemeAndStyle => self.go_to(ScreenId::ThemeAndStyle),
            MainAction::Unavailable(feature) => {
                self.notification = Some(Notification::info(format!(
                    "{feature} is not available yet."
                )));
            }
        }
    }

    pub(crate) fn handle_theme_style_action(&mut self, action: ThemeStyleAction) {
        match action {
            ThemeStyleAction::None => {}
            ThemeStyleAction::ToggleDarkMode => {
                let style = self.theme.style.toggled();
                let result = self
                    .settings
                    .apply_theme(Some(&mut self.theme), Some(style), None);
                self.report(result);
            }
            ThemeStyleAction::NextPalette => {
                let palette = self.theme.palette.next();
                let result = self
                    .settings
                    .apply_theme(Some(&mut self.theme), None, Some(palette));
                self.report(result);
            }
            ThemeStyleAction::AdjustFontSize(delta) => self.adjust_font_size(delta),
            ThemeStyleAction::NextFont => self.next_font(),
            ThemeStyleAction::UploadFont(path) => {
                info!(path = %path.display(), "uploading font package");
                self.notification = Some(self.settings.extract_font_zip(&path));
            }
            ThemeStyleAction::DeleteAllFonts => {
                self.notification = Some(self.settings.delete_all_fonts(Some(&mut self.theme)));
            }
        }
    }

    fn adjust_font_size(&mut self, delta: i32) {
        let current = self
            .settings
            .get_current_font_size(&self.theme)
            .unwrap_or(FALLBACK_FONT_SIZE);
        let next = navigation::clamp_step(current, delta, FONT_SIZE_MIN, FONT_SIZE_MAX);
        if next == current {
            return;
        }
        let result = self
            .settings
            .apply_font_size(Some(&mut self.theme), Some(next as f32));
        self.report(result);
    }

    fn next_font(&mut self) {
        let choices = self.settings.font_choices();
        let current = fonts::display_name(self.current_font());
        let next = match choices.iter().position(|name| *name == current) {
            Some(index) => navigation::wrap_next(index, choices.len()),
            None => 0,
        };
        let Some(name) = choices.get(next).cloned() else {
            return;
        };
        let result = self.settings.apply_font(Some(&mut self.theme), Some(name.as_str()));
        self.report(result);
    }

    /// Stored font name, or the built-in font
    pub(crate) fn current_font(&self) -> &str {
        self.settings
            .settings()
            .font_name
            .as_deref()
            .unwrap_or(DEFAULT_FONT)
    }

    fn report(&mut self, result: Result<(), SettingsError>) {
        if let Err(e) = result {
            self.error_message = Some(format!("Failed to save settings: {e}"));
        }
    }
}
