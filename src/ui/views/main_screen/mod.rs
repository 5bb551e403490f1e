//! Main screen: Home, Calendar and Settings tabs behind a bottom navigation bar

mod input;
mod render;

use crate::router::{Screen, ScreenState};
use crate::ui::navigation;

const TAB_KEY: &str = "tab";
const SETTINGS_SELECTED_KEY: &str = "settings_selected";

/// Tabs of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Calendar,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Calendar, Tab::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Calendar => "Calendar",
            Tab::Settings => "Settings",
        }
    }

    /// Identifier stored in captured state and the remembered UI state
    pub fn name(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Calendar => "calendar",
            Tab::Settings => "settings",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

/// Entries of the Settings tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    AppLock,
    ThemeAndStyle,
    ExportEntries,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 3] = [
        SettingsItem::AppLock,
        SettingsItem::ThemeAndStyle,
        SettingsItem::ExportEntries,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsItem::AppLock => "App Lock",
            SettingsItem::ThemeAndStyle => "Theme & Style",
            SettingsItem::ExportEntries => "Export Entries",
        }
    }
}

/// Action returned by the main screen after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainAction {
    /// No action needed
    None,
    /// Navigate to the Theme & Style screen
    OpenThemeAndStyle,
    /// The selected entry has no implementation (feature label)
    Unavailable(&'static str),
}

/// Main screen state
#[derive(Debug, Default)]
pub struct MainScreen {
    pub(super) tab: Tab,
    pub(super) settings_selected: usize,
}

impl MainScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = Tab::ALL[navigation::wrap_next(self.tab.index(), Tab::ALL.len())];
    }

    pub fn prev_tab(&mut self) {
        self.tab = Tab::ALL[navigation::wrap_prev(self.tab.index(), Tab::ALL.len())];
    }

    pub fn selected_settings_item(&self) -> SettingsItem {
        SettingsItem::ALL[self.settings_selected.min(SettingsItem::ALL.len() - 1)]
    }

    pub(super) fn select_next_item(&mut self) {
        let max = SettingsItem::ALL.len() - 1;
        self.settings_selected = navigation::select_next(self.settings_selected, max);
    }

    pub(super) fn select_prev_item(&mut self) {
        self.settings_selected = navigation::select_prev(self.settings_selected);
    }
}

impl Screen for MainScreen {
    fn capture_state(&self) -> ScreenState {
        ScreenState::from([
            (TAB_KEY.to_string(), self.tab.name().to_string()),
            (
                SETTINGS_SELECTED_KEY.to_string(),
                self.settings_selected.to_string(),
            ),
        ])
    }

    fn restore_state(&mut self, state: &ScreenState) {
        if let Some(tab) = state.get(TAB_KEY).and_then(|n| Tab::from_name(n)) {
            self.tab = tab;
        }
        if let Some(selected) = state
            .get(SETTINGS_SELECTED_KEY)
            .and_then(|s| s.parse::<usize>().ok())
        {
            self.settings_selected = selected.min(SettingsItem::ALL.len() - 1);
        }
    }

    fn active_tab(&self) -> Option<String> {
        Some(self.tab.name().to_string())
    }

    fn set_active_tab(&mut self, tab: &str) {
        if let Some(tab) = Tab::from_name(tab) {
            self.tab = tab;
        }
    }
}
