//! Screens
//!
//! Each screen keeps its own state and turns key input into actions the app
//! carries out.

mod main_screen;
mod theme_style;

pub use main_screen::{MainAction, MainScreen, SettingsItem, Tab};
pub use theme_style::{Row, ThemeStyleAction, ThemeStyleScreen};
