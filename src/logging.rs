//! File logging
//!
//! The terminal belongs to the TUI, so log output goes to a file in the data
//! directory. Nothing is logged unless a filter is configured.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global subscriber when `config.log_filter` is set
pub fn init(config: &Config) -> color_eyre::Result<()> {
    let Some(filter) = config.log_filter.as_deref() else {
        return Ok(());
    };

    let log_file = &config.paths.log_file;
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))?;

    tracing::info!(path = %log_file.display(), "logging initialized");
    Ok(())
}
