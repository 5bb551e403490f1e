//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct, transitions and lifecycle events
//! - `screens`: the screen host handed to the router
//! - `input`: Key event handling
//! - `actions`: Carrying out screen actions through the settings service
//! - `render`: UI rendering

mod actions;
mod input;
mod render;
mod screens;
mod state;

pub use screens::Screens;
pub use state::App;
