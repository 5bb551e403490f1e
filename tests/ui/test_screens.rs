//! Rendering tests for the main and Theme & Style screens

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use tdiary::settings::{Palette, Theme, ThemeStyle};
use tdiary::ui::views::{MainScreen, Row, Tab, ThemeStyleScreen};

use crate::{buffer_lines, buffer_text};

fn draw_main(screen: &MainScreen, theme: &Theme) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
    terminal
        .draw(|frame| screen.render(frame, frame.area(), theme))
        .unwrap();
    buffer_lines(terminal.backend().buffer())
}

fn draw_theme_style(screen: &ThemeStyleScreen, theme: &Theme, font_label: &str) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal
        .draw(|frame| screen.render(frame, frame.area(), theme, font_label))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

fn press(screen: &mut ThemeStyleScreen, code: KeyCode) {
    screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

// =============================================================================
// Main screen
// =============================================================================

#[test]
fn test_main_screen_bottom_nav_lists_tabs() {
    let lines = draw_main(&MainScreen::new(), &Theme::default());
    let labels = lines.last().unwrap();

    let home = labels.find("Home").unwrap();
    let calendar = labels.find("Calendar").unwrap();
    let settings = labels.find("Settings").unwrap();
    assert!(home < calendar && calendar < settings);
}

#[test]
fn test_home_tab_shows_notebook_page() {
    let text = draw_main(&MainScreen::new(), &Theme::default()).join("\n");
    assert!(text.contains("Dear diary,"));
}

#[test]
fn test_calendar_tab_is_unavailable() {
    let mut screen = MainScreen::new();
    screen.select_tab(Tab::Calendar);

    let text = draw_main(&screen, &Theme::default()).join("\n");

    assert!(text.contains("Calendar is not available yet."));
}

#[test]
fn test_settings_tab_lists_entries_with_marker() {
    let mut screen = MainScreen::new();
    screen.select_tab(Tab::Settings);

    let lines = draw_main(&screen, &Theme::default());

    let app_lock = lines.iter().find(|l| l.contains("App Lock")).unwrap();
    let theme = lines.iter().find(|l| l.contains("Theme & Style")).unwrap();
    assert!(lines.iter().any(|l| l.contains("Export Entries")));
    // Only the selected entry carries the marker
    assert_ne!(app_lock.trim_start(), "App Lock");
    assert_eq!(theme.trim_start(), "Theme & Style");
}

// =============================================================================
// Theme & Style screen
// =============================================================================

#[test]
fn test_theme_style_rows_and_values() {
    let mut theme = Theme::default();
    theme.palette = Palette::Teal;

    let text = draw_theme_style(&ThemeStyleScreen::new(), &theme, "Noto Serif");

    for row in Row::ALL {
        assert!(text.contains(row.label()), "missing row {}", row.label());
    }
    assert!(text.contains("Teal"));
    assert!(text.contains("Noto Serif"));
    assert!(text.contains(" 16 sp"));
}

#[test]
fn test_theme_style_dark_toggle_changes_marker() {
    let screen = ThemeStyleScreen::new();
    let light = draw_theme_style(&screen, &Theme::default(), "Roboto");

    let mut dark_theme = Theme::default();
    dark_theme.style = ThemeStyle::Dark;
    let dark = draw_theme_style(&screen, &dark_theme, "Roboto");

    assert_ne!(light, dark);
}

#[test]
fn test_theme_style_slider_follows_font_size() {
    let mut theme = Theme::default();
    theme.set_body_font_size(42.0);

    let text = draw_theme_style(&ThemeStyleScreen::new(), &theme, "Roboto");

    assert!(text.contains(" 42 sp"));
}

#[test]
fn test_theme_style_draws_open_dialog_on_top() {
    let mut screen = ThemeStyleScreen::new();
    while screen.selected_row() != Row::DeleteFonts {
        press(&mut screen, KeyCode::Char('j'));
    }
    press(&mut screen, KeyCode::Enter);

    let text = draw_theme_style(&screen, &Theme::default(), "Roboto");

    assert!(text.contains("Delete all uploaded fonts?"));
}
