//! tdiary - a text-mode diary shell
//!
//! This library provides:
//! - [`app`]: Application state and event handling
//! - [`config`]: Data directory and environment configuration
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File logging setup
//! - [`model`]: Domain models
//! - [`router`]: Screen navigation with a back-stack
//! - [`settings`]: Persisted settings, live theme and font packages
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod keys;
pub mod logging;
pub mod model;
pub mod router;
pub mod settings;
pub mod ui;
