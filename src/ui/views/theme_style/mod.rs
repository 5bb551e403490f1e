//! Theme & Style screen: dark mode, palette, font size and font packages

mod input;
mod render;

use std::path::PathBuf;

use crate::router::{Screen, ScreenState};
use crate::ui::components::Dialog;
use crate::ui::navigation;

const SELECTED_ROW_KEY: &str = "selected_row";

/// Rows of the screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    DarkTheme,
    Palette,
    FontSize,
    Font,
    UploadFont,
    DeleteFonts,
}

impl Row {
    pub const ALL: [Row; 6] = [
        Row::DarkTheme,
        Row::Palette,
        Row::FontSize,
        Row::Font,
        Row::UploadFont,
        Row::DeleteFonts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Row::DarkTheme => "Dark theme",
            Row::Palette => "Primary color",
            Row::FontSize => "Font size",
            Row::Font => "Font",
            Row::UploadFont => "Upload font (ZIP)",
            Row::DeleteFonts => "Delete uploaded fonts",
        }
    }
}

/// Action returned by the Theme & Style screen after handling input
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeStyleAction {
    /// No action needed
    None,
    ToggleDarkMode,
    NextPalette,
    /// Move the font size by the given number of sp
    AdjustFontSize(i32),
    NextFont,
    /// Install the font package at the given path
    UploadFont(PathBuf),
    DeleteAllFonts,
}

/// Theme & Style screen state
#[derive(Debug, Default)]
pub struct ThemeStyleScreen {
    pub(super) selected: usize,
    /// Open dialog (blocks other input when Some)
    pub(super) dialog: Option<Dialog>,
}

impl ThemeStyleScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_row(&self) -> Row {
        Row::ALL[self.selected.min(Row::ALL.len() - 1)]
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub(super) fn select_next(&mut self) {
        self.selected = navigation::select_next(self.selected, Row::ALL.len() - 1);
    }

    pub(super) fn select_prev(&mut self) {
        self.selected = navigation::select_prev(self.selected);
    }
}

impl Screen for ThemeStyleScreen {
    fn capture_state(&self) -> ScreenState {
        ScreenState::from([(SELECTED_ROW_KEY.to_string(), self.selected.to_string())])
    }

    fn restore_state(&mut self, state: &ScreenState) {
        if let Some(selected) = state
            .get(SELECTED_ROW_KEY)
            .and_then(|s| s.parse::<usize>().ok())
        {
            self.selected = selected.min(Row::ALL.len() - 1);
        }
    }

    fn close_overlay(&mut self) -> bool {
        self.dialog.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(screen: &mut ThemeStyleScreen, code: KeyCode) -> ThemeStyleAction {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn select(screen: &mut ThemeStyleScreen, row: Row) {
        while screen.selected_row() != row {
            press(screen, KeyCode::Char('j'));
        }
    }

    #[test]
    fn test_rows_clamp() {
        let mut screen = ThemeStyleScreen::new();
        press(&mut screen, KeyCode::Char('k'));
        assert_eq!(screen.selected_row(), Row::DarkTheme);
        for _ in 0..10 {
            press(&mut screen, KeyCode::Down);
        }
        assert_eq!(screen.selected_row(), Row::DeleteFonts);
    }

    #[test]
    fn test_activate_rows() {
        let mut screen = ThemeStyleScreen::new();
        assert_eq!(press(&mut screen, KeyCode::Char(' ')), ThemeStyleAction::ToggleDarkMode);
        select(&mut screen, Row::Palette);
        assert_eq!(press(&mut screen, KeyCode::Enter), ThemeStyleAction::NextPalette);
        select(&mut screen, Row::Font);
        assert_eq!(press(&mut screen, KeyCode::Enter), ThemeStyleAction::NextFont);
    }

    #[test]
    fn test_arrows_adjust_font_size() {
        let mut screen = ThemeStyleScreen::new();
        assert_eq!(press(&mut screen, KeyCode::Right), ThemeStyleAction::AdjustFontSize(1));
        assert_eq!(press(&mut screen, KeyCode::Left), ThemeStyleAction::AdjustFontSize(-1));
    }

    #[test]
    fn test_upload_prompt_returns_path() {
        let mut screen = ThemeStyleScreen::new();
        select(&mut screen, Row::UploadFont);
        assert_eq!(press(&mut screen, KeyCode::Enter), ThemeStyleAction::None);
        assert!(screen.has_dialog());

        for c in "/tmp/Inter.zip".chars() {
            press(&mut screen, KeyCode::Char(c));
        }
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ThemeStyleAction::UploadFont(PathBuf::from("/tmp/Inter.zip"))
        );
        assert!(!screen.has_dialog());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut screen = ThemeStyleScreen::new();
        select(&mut screen, Row::DeleteFonts);
        press(&mut screen, KeyCode::Enter);
        assert_eq!(press(&mut screen, KeyCode::Char('n')), ThemeStyleAction::None);
        assert!(!screen.has_dialog());

        press(&mut screen, KeyCode::Enter);
        assert_eq!(press(&mut screen, KeyCode::Char('y')), ThemeStyleAction::DeleteAllFonts);
    }

    #[test]
    fn test_dialog_captures_keys() {
        let mut screen = ThemeStyleScreen::new();
        select(&mut screen, Row::UploadFont);
        press(&mut screen, KeyCode::Enter);
        // 'j' is typed into the prompt, not used for row movement
        press(&mut screen, KeyCode::Char('j'));
        assert_eq!(screen.selected_row(), Row::UploadFont);
    }

    #[test]
    fn test_close_overlay_consumes_dialog_once() {
        let mut screen = ThemeStyleScreen::new();
        select(&mut screen, Row::DeleteFonts);
        press(&mut screen, KeyCode::Enter);
        assert!(screen.close_overlay());
        assert!(!screen.close_overlay());
    }

    #[test]
    fn test_state_round_trip() {
        let mut screen = ThemeStyleScreen::new();
        select(&mut screen, Row::Font);
        let state = screen.capture_state();

        let mut fresh = ThemeStyleScreen::new();
        fresh.restore_state(&state);
        assert_eq!(fresh.selected_row(), Row::Font);
    }
}
