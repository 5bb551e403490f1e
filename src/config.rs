//! Runtime configuration
//!
//! Everything is derived from the data directory and a few environment
//! variables; there is no configuration file of its own.

use std::env;
use std::path::{Path, PathBuf};

/// Overrides the data directory
pub const HOME_ENV: &str = "TDIARY_HOME";
/// Pixels per sp (float, default 1.0)
pub const SP_SCALE_ENV: &str = "TDIARY_SP_SCALE";
/// `EnvFilter` directives for the log file; logging is off when unset
pub const LOG_ENV: &str = "TDIARY_LOG";

const APP_DIR: &str = "tdiary";
const FALLBACK_DIR: &str = ".tdiary";

/// Files and directories the application reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    /// Read-only default settings layer
    pub default_settings: PathBuf,
    /// User settings layer, rewritten on every change
    pub user_settings: PathBuf,
    /// One subdirectory per font package
    pub fonts_dir: PathBuf,
    pub log_file: PathBuf,
}

impl AppPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            default_settings: data_dir.join("default_settings.json"),
            user_settings: data_dir.join("user_settings.json"),
            fonts_dir: data_dir.join("fonts"),
            log_file: data_dir.join("tdiary.log"),
            data_dir,
        }
    }

    /// `$TDIARY_HOME`, else the platform data directory, else `./.tdiary`
    pub fn discover() -> Self {
        Self::new(resolve_data_dir(
            env::var_os(HOME_ENV).map(PathBuf::from),
            dirs::data_dir(),
        ))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn resolve_data_dir(explicit: Option<PathBuf>, platform: Option<PathBuf>) -> PathBuf {
    explicit
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| platform.map(|p| p.join(APP_DIR)))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR))
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: AppPaths,
    pub sp_scale: f32,
    pub log_filter: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            paths: AppPaths::discover(),
            sp_scale: parse_sp_scale(env::var(SP_SCALE_ENV).ok().as_deref()),
            log_filter: env::var(LOG_ENV).ok().filter(|f| !f.trim().is_empty()),
        }
    }
}

/// Parse a scale factor; anything unparsable or non-positive is 1.0
fn parse_sp_scale(raw: Option<&str>) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(1.0)
}
