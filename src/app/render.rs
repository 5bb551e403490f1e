//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};

use super::state::App;
use crate::keys::{self, KeyHint};
use crate::router::{Direction, ScreenId};
use crate::settings::fonts;
use crate::ui::theme::Colors;
use crate::ui::views::Tab;
use crate::ui::widgets::{
    BOTTOM_NAV_HEIGHT, STATUS_BAR_HEIGHT, render_error_banner, render_notification_banner,
    render_status_bar,
};

/// Horizontal offset of a sliding screen, `progress` in 0.0..=1.0
pub(crate) fn slide_offset(direction: Direction, progress: f32, width: u16) -> u16 {
    let progress = progress.clamp(0.0, 1.0);
    let moved = match direction {
        // Incoming screen enters from the right
        Direction::Forward => 1.0 - progress,
        // Outgoing screen leaves to the right
        Direction::Backward => progress,
    };
    (moved * f32::from(width)) as u16
}

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let colors = Colors::from_theme(&self.theme);
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(colors.background).fg(colors.text)),
            area,
        );

        let Some(visible) = self.router.visible() else {
            render_splash(frame, area);
            return;
        };

        let content = Rect {
            height: area.height.saturating_sub(STATUS_BAR_HEIGHT),
            ..area
        };
        let screen_area = self.sliding_area(content);
        if !screen_area.is_empty() {
            self.render_screen(frame, visible, screen_area);
        }

        let (title, hints) = self.status_hints(visible);
        render_status_bar(frame, title, colors.primary, hints);

        let banner_offset = match visible {
            ScreenId::Main => STATUS_BAR_HEIGHT + BOTTOM_NAV_HEIGHT,
            ScreenId::ThemeAndStyle => STATUS_BAR_HEIGHT,
        };
        // Errors are always shown prominently
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error, banner_offset);
        } else if let Some(notification) = self.notification.as_ref().filter(|n| !n.is_expired()) {
            render_notification_banner(frame, notification, banner_offset);
        }
    }

    fn sliding_area(&self, content: Rect) -> Rect {
        let (Some(transition), Some(progress)) =
            (self.router.transition(), self.transition_progress())
        else {
            return content;
        };
        let offset = slide_offset(transition.direction, progress, content.width);
        Rect {
            x: content.x + offset,
            width: content.width - offset,
            ..content
        }
    }

    fn render_screen(&self, frame: &mut Frame, id: ScreenId, area: Rect) {
        match id {
            ScreenId::Main => {
                if let Some(screen) = &self.screens.main {
                    screen.render(frame, area, &self.theme);
                }
            }
            ScreenId::ThemeAndStyle => {
                if let Some(screen) = &self.screens.theme_style {
                    screen.render(frame, area, &self.theme, &self.font_label());
                }
            }
        }
    }

    /// Font shown on the Theme & Style screen
    fn font_label(&self) -> String {
        let stored = self.current_font();
        let label = fonts::display_name(stored);
        if stored == fonts::DEFAULT_FONT || self.settings.fonts().contains(stored) {
            label
        } else {
            format!("{label} (not installed)")
        }
    }

    fn status_hints(&self, visible: ScreenId) -> (&'static str, &'static [KeyHint]) {
        match visible {
            ScreenId::Main => {
                let tab = self
                    .screens
                    .main
                    .as_ref()
                    .map(|s| s.tab())
                    .unwrap_or_default();
                if tab == Tab::Settings {
                    ("tdiary", keys::MAIN_SETTINGS_HINTS)
                } else {
                    ("tdiary", keys::MAIN_HINTS)
                }
            }
            ScreenId::ThemeAndStyle => {
                let prompt_open = self
                    .screens
                    .theme_style
                    .as_ref()
                    .is_some_and(|s| s.has_dialog());
                if prompt_open {
                    ("Theme & Style", keys::PROMPT_HINTS)
                } else {
                    ("Theme & Style", keys::THEME_STYLE_HINTS)
                }
            }
        }
    }
}

/// Shown until the screens are registered
fn render_splash(frame: &mut Frame, area: Rect) {
    let y = area.y + area.height / 2;
    let line_area = Rect {
        y,
        height: 1.min(area.height),
        ..area
    };
    let title = Line::from("tdiary").bold();
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        line_area,
    );
}
