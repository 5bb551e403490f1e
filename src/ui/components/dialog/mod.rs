//! Dialog components
//!
//! Provides reusable modal dialogs:
//! - Confirm dialog: Yes/No confirmation
//! - Input dialog: single-line text prompt (file paths)

mod confirm;
mod input;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use tui_textarea::TextArea;

/// What to do with the dialog result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCallback {
    /// Delete every installed font package (Confirm dialog)
    DeleteAllFonts,
    /// Install a font package from a ZIP path (Input dialog)
    UploadFont,
}

/// Dialog kind and content
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// Simple Yes/No confirmation
    Confirm {
        title: String,
        message: String,
        /// Optional detail text (warning, etc.)
        detail: Option<String>,
    },
    /// Single-line text prompt
    Input {
        title: String,
        prompt: String,
        textarea: TextArea<'static>,
    },
}

/// Dialog result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// Confirmed with entered values (empty for Confirm dialog)
    Confirmed(Vec<String>),
    /// Cancelled
    Cancelled,
}

/// Dialog state
#[derive(Debug, Clone)]
pub struct Dialog {
    /// Dialog kind and content
    pub kind: DialogKind,
    /// Callback identifier
    pub callback_id: DialogCallback,
}

impl Dialog {
    /// Create a new Confirm dialog
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: Option<String>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Confirm {
                title: title.into(),
                message: message.into(),
                detail,
            },
            callback_id,
        }
    }

    /// Create a new Input dialog
    pub fn input(
        title: impl Into<String>,
        prompt: impl Into<String>,
        placeholder: &str,
        callback_id: DialogCallback,
    ) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(placeholder);
        Self {
            kind: DialogKind::Input {
                title: title.into(),
                prompt: prompt.into(),
                textarea,
            },
            callback_id,
        }
    }

    /// Handle key input, returns Some(result) when dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        match &mut self.kind {
            DialogKind::Confirm { .. } => Self::handle_confirm_key(key),
            DialogKind::Input { textarea, .. } => Self::handle_input_key(textarea, key),
        }
    }

    /// Render the dialog centered on screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.kind {
            DialogKind::Confirm {
                title,
                message,
                detail,
            } => self.render_confirm(frame, area, title, message, detail.as_deref()),
            DialogKind::Input {
                title,
                prompt,
                textarea,
            } => self.render_input(frame, area, title, prompt, textarea),
        }
    }
}

/// Calculate a centered rectangle within the given area
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let vertical_layout = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .split(vertical_layout[1]);

    horizontal_layout[1]
}
