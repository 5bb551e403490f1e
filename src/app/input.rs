//! Input handling for the application

use crossterm::event::{KeyEvent, KeyModifiers};

use super::state::App;
use crate::keys;
use crate::router::ScreenId;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_force_quit(&key) {
            self.quit();
            return;
        }

        let Some(current) = self.router.current() else {
            // Screens are not registered yet; only allow leaving
            if keys::is_back(key.code) {
                self.quit();
            }
            return;
        };

        if self.handle_back_key(current, key) {
            return;
        }

        match current {
            ScreenId::Main => {
                let Some(screen) = self.screens.main.as_mut() else {
                    return;
                };
                let action = screen.handle_key(key);
                self.handle_main_action(action);
            }
            ScreenId::ThemeAndStyle => {
                let Some(screen) = self.screens.theme_style.as_mut() else {
                    return;
                };
                let action = screen.handle_key(key);
                self.handle_theme_style_action(action);
            }
        }
    }

    /// Esc always goes back (closing an open dialog first); `q` goes back
    /// unless a dialog is taking text input.
    fn handle_back_key(&mut self, current: ScreenId, key: KeyEvent) -> bool {
        if !keys::is_back(key.code) || key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        let dialog_open = current == ScreenId::ThemeAndStyle
            && self
                .screens
                .theme_style
                .as_ref()
                .is_some_and(|s| s.has_dialog());
        if dialog_open && key.code != keys::ESC {
            return false;
        }

        self.go_back();
        true
    }
}
