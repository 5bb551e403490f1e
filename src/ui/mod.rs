//! UI layer
//!
//! Contains screens, widgets, components, symbols, and theme colors.

pub mod components;
pub mod navigation;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
