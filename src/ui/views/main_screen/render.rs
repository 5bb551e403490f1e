//! Main screen rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{MainScreen, SettingsItem, Tab};
use crate::settings::Theme;
use crate::ui::components;
use crate::ui::symbols::markers;
use crate::ui::theme::Colors;
use crate::ui::widgets::{BOTTOM_NAV_HEIGHT, BottomNavBar, NotebookText, line_spacing_for};

/// Sample page shown on the Home tab
const WELCOME_PAGE: &str = "Dear diary,\n\
    this notebook follows your theme. Change the palette, the font and the \
    font size under Settings > Theme & Style and the ruled lines here follow \
    along.";

impl MainScreen {
    /// Render the main screen: content above, bottom navigation bar below
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let colors = Colors::from_theme(theme);
        let [content_area, nav_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(BOTTOM_NAV_HEIGHT)])
                .areas(area);

        let block = components::screen_block(self.tab.label(), colors.primary);
        let inner = block.inner(content_area);
        frame.render_widget(block, content_area);

        match self.tab {
            Tab::Home => {
                let spacing = line_spacing_for(theme.body_font_size().unwrap_or(16));
                let notebook = NotebookText::new(WELCOME_PAGE)
                    .line_spacing(spacing)
                    .text_color(colors.text)
                    .rule_color(colors.rule);
                frame.render_widget(notebook, inner);
            }
            Tab::Calendar => {
                frame.render_widget(components::unavailable_state("Calendar"), inner);
            }
            Tab::Settings => self.render_settings_list(frame, inner, &colors),
        }

        let labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        let nav = BottomNavBar::new(&labels, self.tab.index())
            .accent(colors.primary)
            .muted(colors.muted);
        frame.render_widget(nav, nav_area);
    }

    fn render_settings_list(&self, frame: &mut Frame, area: Rect, colors: &Colors) {
        let selected = self.selected_settings_item();
        let lines: Vec<Line> = SettingsItem::ALL
            .iter()
            .map(|item| {
                if *item == selected {
                    Line::from(vec![
                        Span::styled(
                            format!(" {} ", markers::SELECTED),
                            Style::default().fg(colors.primary),
                        ),
                        Span::styled(
                            item.label(),
                            Style::default()
                                .fg(colors.text)
                                .bg(colors.selected_bg)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw("   "),
                        Span::styled(item.label(), Style::default().fg(colors.text)),
                    ])
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}
