//! Screen identities and the capabilities the router needs from them

use std::collections::BTreeMap;
use std::fmt;

/// UI state captured from a screen when navigating away from it
pub type ScreenState = BTreeMap<String, String>;

/// Screens known to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScreenId {
    /// Tabbed main screen (Home / Calendar / Settings)
    Main,
    /// Theme, palette and font settings
    ThemeAndStyle,
}

impl ScreenId {
    /// Every screen, in registration order
    pub const ALL: [ScreenId; 2] = [ScreenId::Main, ScreenId::ThemeAndStyle];

    /// Screen made current after (re-)registration
    pub const INITIAL: ScreenId = ScreenId::Main;

    pub fn name(self) -> &'static str {
        match self {
            ScreenId::Main => "main_screen",
            ScreenId::ThemeAndStyle => "theme_and_style_screen",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capabilities a screen offers to the router.
///
/// Every method has a no-op default, so screens without state to preserve
/// implement the trait with an empty `impl` block.
pub trait Screen {
    /// Snapshot whatever must survive a round trip through the back-stack
    fn capture_state(&self) -> ScreenState {
        ScreenState::new()
    }

    /// Re-apply a snapshot taken by [`Screen::capture_state`]
    fn restore_state(&mut self, _state: &ScreenState) {}

    /// Name of the active tab, for screens that have tabs
    fn active_tab(&self) -> Option<String> {
        None
    }

    fn set_active_tab(&mut self, _tab: &str) {}

    /// Close an open dialog, drawer or prompt.
    ///
    /// Returns true when something was closed, which consumes the back action.
    fn close_overlay(&mut self) -> bool {
        false
    }
}

/// Container owning the live screen instances
pub trait ScreenHost {
    fn screen(&self, id: ScreenId) -> Option<&dyn Screen>;

    fn screen_mut(&mut self, id: ScreenId) -> Option<&mut dyn Screen>;

    /// Create a fresh instance of `id`, replacing any existing one
    fn install(&mut self, id: ScreenId);

    fn has_screen(&self, id: ScreenId) -> bool {
        self.screen(id).is_some()
    }
}
