//! Rendering tests for the whole application frame

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use tdiary::app::App;

use crate::buffer_lines;
use crate::common::TestData;

fn draw(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    buffer_lines(terminal.backend().buffer())
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_splash_before_registration() {
    let data = TestData::new();
    let app = App::with_paths(data.paths.clone(), 1.0);

    let lines = draw(&app);

    assert_eq!(lines[12].trim(), "tdiary");
    assert!(!lines.join("\n").contains("Home"));
}

#[test]
fn test_status_bar_follows_tab() {
    let data = TestData::new();
    let mut app = App::with_paths(data.paths.clone(), 1.0);
    app.after_draw();

    let home = draw(&app);
    let status = home.last().unwrap();
    assert!(status.contains("tdiary"));
    assert!(status.contains("[q] Quit"));
    assert!(!status.contains("Open"));

    press(&mut app, KeyCode::Char('3'));
    let settings = draw(&app);
    assert!(settings.last().unwrap().contains("[Enter] Open"));
}

#[test]
fn test_theme_and_style_frame() {
    let data = TestData::new();
    let mut app = App::with_paths(data.paths.clone(), 1.0);
    app.after_draw();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    app.complete_transition();

    let lines = draw(&app);
    let text = lines.join("\n");

    assert!(text.contains("Dark theme"));
    assert!(text.contains("Roboto"));
    assert!(lines.last().unwrap().contains("[Esc] Back"));
}

#[test]
fn test_missing_font_is_marked() {
    let data = TestData::new();
    data.write_user_settings(r#"{"font_name": "Ghost_Font"}"#);
    let mut app = App::with_paths(data.paths.clone(), 1.0);
    app.after_draw();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    app.complete_transition();

    let text = draw(&app).join("\n");

    assert!(text.contains("Ghost Font (not installed)"));
}

#[test]
fn test_notification_banner_is_drawn() {
    let data = TestData::new();
    let mut app = App::with_paths(data.paths.clone(), 1.0);
    app.after_draw();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Enter);

    let text = draw(&app).join("\n");

    assert!(text.contains("App Lock is not available yet."));
}

#[test]
fn test_error_banner_wins_over_notification() {
    let data = TestData::new();
    let mut app = App::with_paths(data.paths.clone(), 1.0);
    app.after_draw();
    app.notification = Some(tdiary::model::Notification::info("quiet"));
    app.error_message = Some("Failed to save settings: disk full".to_string());

    let text = draw(&app).join("\n");

    assert!(text.contains("Failed to save settings: disk full"));
    assert!(!text.contains("quiet"));
}
