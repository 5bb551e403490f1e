//! UI symbols (markers, slider glyphs, rules)
//!
//! Unicode box-drawing and geometric characters only; every terminal font
//! used in practice has them.

/// Row and tab markers
pub mod markers {
    /// Selected row marker (▸)
    pub const SELECTED: char = '▸';
    /// Toggle on
    pub const TOGGLE_ON: &str = "[x]";
    /// Toggle off
    pub const TOGGLE_OFF: &str = "[ ]";
    /// Palette swatch (■)
    pub const SWATCH: char = '■';
}

/// Font size slider glyphs
pub mod slider {
    /// Filled part of the track (━)
    pub const FILLED: char = '━';
    /// Empty part of the track (─)
    pub const EMPTY: char = '─';
    /// Handle (●)
    pub const HANDLE: char = '●';
}

/// Ruled lines
pub mod rules {
    /// Horizontal rule (─)
    pub const HORIZONTAL: char = '─';
    /// Active tab underline (▔)
    pub const TAB_INDICATOR: char = '▔';
}
