//! Live screen instances

use tracing::debug;

use crate::router::{Screen, ScreenHost, ScreenId};
use crate::ui::views::{MainScreen, ThemeStyleScreen};

/// Owner of the live screens; empty until the router registers them
#[derive(Debug, Default)]
pub struct Screens {
    pub main: Option<MainScreen>,
    pub theme_style: Option<ThemeStyleScreen>,
}

impl ScreenHost for Screens {
    fn screen(&self, id: ScreenId) -> Option<&dyn Screen> {
        match id {
            ScreenId::Main => self.main.as_ref().map(|s| s as &dyn Screen),
            ScreenId::ThemeAndStyle => self.theme_style.as_ref().map(|s| s as &dyn Screen),
        }
    }

    fn screen_mut(&mut self, id: ScreenId) -> Option<&mut dyn Screen> {
        match id {
            ScreenId::Main => self.main.as_mut().map(|s| s as &mut dyn Screen),
            ScreenId::ThemeAndStyle => self.theme_style.as_mut().map(|s| s as &mut dyn Screen),
        }
    }

    fn install(&mut self, id: ScreenId) {
        debug!(screen = %id, "installing screen");
        match id {
            ScreenId::Main => self.main = Some(MainScreen::new()),
            ScreenId::ThemeAndStyle => self.theme_style = Some(ThemeStyleScreen::new()),
        }
    }
}
