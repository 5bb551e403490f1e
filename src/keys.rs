//! Keybinding definitions for tdiary
//!
//! All keybindings are defined here so screens never match on raw key codes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Global keys
// =============================================================================

/// Go back (quits on the first screen)
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Go back / close overlay
pub const ESC: KeyCode = KeyCode::Esc;

/// Check if key is Ctrl+C (always quits)
/// Note: Accept both 'c' and 'C' for terminal compatibility
pub fn is_force_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key asks to go back (Esc or q)
pub fn is_back(code: KeyCode) -> bool {
    matches!(code, QUIT | ESC)
}

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Previous tab / decrease (vim style)
pub const LEFT: KeyCode = KeyCode::Char('h');

/// Previous tab / decrease (arrow key)
pub const LEFT_ARROW: KeyCode = KeyCode::Left;

/// Next tab / increase (vim style)
pub const RIGHT: KeyCode = KeyCode::Char('l');

/// Next tab / increase (arrow key)
pub const RIGHT_ARROW: KeyCode = KeyCode::Right;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

/// Check if key is left (h or ←)
pub fn is_left(code: KeyCode) -> bool {
    matches!(code, LEFT | LEFT_ARROW)
}

/// Check if key is right (l or →)
pub fn is_right(code: KeyCode) -> bool {
    matches!(code, RIGHT | RIGHT_ARROW)
}

/// Tab shortcut ('1'..'9') as a zero-based index
pub fn tab_shortcut(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(c @ '1'..='9') => Some(c as usize - '1' as usize),
        _ => None,
    }
}

// =============================================================================
// Action keys
// =============================================================================

/// Open / confirm the selected item
pub const SELECT: KeyCode = KeyCode::Enter;

/// Toggle the selected item
pub const TOGGLE: KeyCode = KeyCode::Char(' ');

/// Check if key activates the selected row (Enter or Space)
pub fn is_activate(code: KeyCode) -> bool {
    matches!(code, SELECT | TOGGLE)
}

// =============================================================================
// Key hints (status bar)
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "Esc",
    label: "Back",
    color: Color::Red,
};
pub const HINT_TABS: KeyHint = KeyHint {
    key: "←→",
    label: "Tabs",
    color: Color::Cyan,
};
pub const HINT_MOVE: KeyHint = KeyHint {
    key: "j/k",
    label: "Move",
    color: Color::Cyan,
};
pub const HINT_OPEN: KeyHint = KeyHint {
    key: "Enter",
    label: "Open",
    color: Color::Green,
};
pub const HINT_CHANGE: KeyHint = KeyHint {
    key: "Enter",
    label: "Change",
    color: Color::Green,
};
pub const HINT_SIZE: KeyHint = KeyHint {
    key: "←→",
    label: "Size",
    color: Color::Yellow,
};
pub const HINT_SUBMIT: KeyHint = KeyHint {
    key: "Enter",
    label: "Upload",
    color: Color::Green,
};
pub const HINT_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Red,
};

/// Main screen, Home and Calendar tabs
pub const MAIN_HINTS: &[KeyHint] = &[HINT_TABS, HINT_QUIT];

/// Main screen, Settings tab
pub const MAIN_SETTINGS_HINTS: &[KeyHint] = &[HINT_TABS, HINT_MOVE, HINT_OPEN, HINT_QUIT];

/// Theme & Style screen
pub const THEME_STYLE_HINTS: &[KeyHint] = &[HINT_MOVE, HINT_CHANGE, HINT_SIZE, HINT_BACK];

/// Path prompt open
pub const PROMPT_HINTS: &[KeyHint] = &[HINT_SUBMIT, HINT_CANCEL];
