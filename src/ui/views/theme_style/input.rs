//! Theme & Style screen key handling

use std::path::PathBuf;

use crossterm::event::KeyEvent;

use super::{Row, ThemeStyleAction, ThemeStyleScreen};
use crate::keys;
use crate::ui::components::{Dialog, DialogCallback, DialogResult};

impl ThemeStyleScreen {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> ThemeStyleAction {
        if let Some(dialog) = self.dialog.as_mut() {
            let Some(result) = dialog.handle_key(key) else {
                return ThemeStyleAction::None;
            };
            let callback = dialog.callback_id;
            self.dialog = None;
            return Self::dialog_action(callback, result);
        }

        match key.code {
            k if keys::is_move_down(k) => {
                self.select_next();
                ThemeStyleAction::None
            }
            k if keys::is_move_up(k) => {
                self.select_prev();
                ThemeStyleAction::None
            }
            k if keys::is_left(k) => ThemeStyleAction::AdjustFontSize(-1),
            k if keys::is_right(k) => ThemeStyleAction::AdjustFontSize(1),
            k if keys::is_activate(k) => self.activate(),
            _ => ThemeStyleAction::None,
        }
    }

    fn activate(&mut self) -> ThemeStyleAction {
        match self.selected_row() {
            Row::DarkTheme => ThemeStyleAction::ToggleDarkMode,
            Row::Palette => ThemeStyleAction::NextPalette,
            Row::FontSize => ThemeStyleAction::None,
            Row::Font => ThemeStyleAction::NextFont,
            Row::UploadFont => {
                self.dialog = Some(Dialog::input(
                    "Upload Font",
                    "Path to a font ZIP (Name.zip with Name-Regular.ttf):",
                    "~/Downloads/Inter.zip",
                    DialogCallback::UploadFont,
                ));
                ThemeStyleAction::None
            }
            Row::DeleteFonts => {
                self.dialog = Some(Dialog::confirm(
                    "Delete Fonts",
                    "Delete all uploaded fonts?",
                    Some("The font falls back to Roboto.".to_string()),
                    DialogCallback::DeleteAllFonts,
                ));
                ThemeStyleAction::None
            }
        }
    }

    fn dialog_action(callback: DialogCallback, result: DialogResult) -> ThemeStyleAction {
        let DialogResult::Confirmed(values) = result else {
            return ThemeStyleAction::None;
        };
        match callback {
            DialogCallback::DeleteAllFonts => ThemeStyleAction::DeleteAllFonts,
            DialogCallback::UploadFont => values
                .into_iter()
                .next()
                .map(|path| ThemeStyleAction::UploadFont(expand_home(&path)))
                .unwrap_or(ThemeStyleAction::None),
        }
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
