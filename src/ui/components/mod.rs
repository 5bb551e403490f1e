//! Reusable UI components
//!
//! Common building blocks for screens.

pub mod blocks;
pub mod dialog;
pub mod empty_state;

pub use blocks::*;
pub use dialog::{Dialog, DialogCallback, DialogKind, DialogResult};
pub use empty_state::*;
