//! Rendering tests for the dialog components

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use tdiary::ui::components::{Dialog, DialogCallback};

use crate::buffer_text;

fn draw(dialog: &Dialog, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| dialog.render(frame, frame.area()))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_confirm_dialog_shows_message_and_choices() {
    let dialog = Dialog::confirm(
        "Delete Fonts",
        "Delete all uploaded fonts?",
        None,
        DialogCallback::DeleteAllFonts,
    );

    let text = draw(&dialog, 60, 12);

    assert!(text.contains(" Delete Fonts "));
    assert!(text.contains("Delete all uploaded fonts?"));
    assert!(text.contains("[y] Yes"));
    assert!(text.contains("[n] No"));
}

#[test]
fn test_confirm_dialog_with_detail() {
    let dialog = Dialog::confirm(
        "Delete Fonts",
        "Delete all uploaded fonts?",
        Some("The font falls back to Roboto.".to_string()),
        DialogCallback::DeleteAllFonts,
    );

    let text = draw(&dialog, 60, 14);

    assert!(text.contains("The font falls back to Roboto."));
}

#[test]
fn test_input_dialog_shows_typed_text() {
    let mut dialog = Dialog::input(
        "Upload Font",
        "Path to a font ZIP:",
        "~/Downloads/Inter.zip",
        DialogCallback::UploadFont,
    );
    for c in "/tmp/Lora.zip".chars() {
        dialog.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    let text = draw(&dialog, 70, 14);

    assert!(text.contains(" Upload Font "));
    assert!(text.contains("Path to a font ZIP:"));
    assert!(text.contains("/tmp/Lora.zip"));
}

#[test]
fn test_dialog_in_tiny_terminal_does_not_panic() {
    let dialog = Dialog::confirm("Delete Fonts", "Sure?", None, DialogCallback::DeleteAllFonts);
    draw(&dialog, 6, 3);
}
