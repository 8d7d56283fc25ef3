//! Centralized path definitions for chatshield
//!
//! ## Storage Layout
//!
//! ```text
//! <config dir>/chatshield/
//! └── config.toml               # Timing, display and link-table preferences
//! ```
//!
//! `<config dir>` is the platform configuration directory
//! (`~/.config` on Linux, `~/Library/Application Support` on macOS,
//! `%APPDATA%` on Windows). The printable export defaults to the current
//! directory.

use std::path::PathBuf;

/// Config directory name
const APP_DIR: &str = "chatshield";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Default filename of the printable export
pub const EXPORT_FILE: &str = "chatshield.html";

/// Get the chatshield config directory.
///
/// Falls back to `./.chatshield` when the platform has no config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".chatshield"), |dir| dir.join(APP_DIR))
}

/// Get the config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Get the default export path.
#[must_use]
pub fn export_file() -> PathBuf {
    PathBuf::from(EXPORT_FILE)
}
