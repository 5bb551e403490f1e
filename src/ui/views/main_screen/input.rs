//! Main screen key handling

use crossterm::event::KeyEvent;

use super::{MainAction, MainScreen, SettingsItem, Tab};
use crate::keys;

impl MainScreen {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> MainAction {
        match key.code {
            // Tabs
            k if keys::is_left(k) => {
                self.prev_tab();
                MainAction::None
            }
            k if keys::is_right(k) => {
                self.next_tab();
                MainAction::None
            }
            k if keys::tab_shortcut(k).is_some() => {
                if let Some(tab) = keys::tab_shortcut(k).and_then(|i| Tab::ALL.get(i)) {
                    self.tab = *tab;
                }
                MainAction::None
            }

            // Settings tab entries
            k if self.tab == Tab::Settings && keys::is_move_down(k) => {
                self.select_next_item();
                MainAction::None
            }
            k if self.tab == Tab::Settings && keys::is_move_up(k) => {
                self.select_prev_item();
                MainAction::None
            }
            keys::SELECT if self.tab == Tab::Settings => match self.selected_settings_item() {
                SettingsItem::ThemeAndStyle => MainAction::OpenThemeAndStyle,
                item => MainAction::Unavailable(item.label()),
            },

            _ => MainAction::None,
        }
    }
}
