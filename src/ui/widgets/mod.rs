//! Reusable UI widgets

mod bottom_nav;
mod font_slider;
mod notebook;
mod notification_banner;
mod status_bar;

pub use bottom_nav::{BOTTOM_NAV_HEIGHT, BottomNavBar, item_areas};
pub use font_slider::{FONT_SIZE_MAX, FONT_SIZE_MIN, FontSizeSlider, handle_offset};
pub use notebook::{NotebookText, line_spacing_for, wrap};
pub use notification_banner::{
    build_error_line, build_notification_line, render_error_banner, render_notification_banner,
};
pub use status_bar::{
    STATUS_BAR_HEIGHT, build_status_bar, build_status_bar_with_prefix, render_status_bar,
};
