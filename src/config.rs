//! Configuration management
//!
//! Preferences are stored at `<config dir>/chatshield/config.toml`. Every field
//! has a default, so a missing file, a missing section or a partial section all
//! load cleanly. Hosts under `[links]` that are not plain hostnames are
//! skipped with a warning.
//!
//! ```toml
//! [timing]
//! feedback_ms = 2500
//! sending_ms = 1500
//! reveal_ms = 800
//!
//! [display]
//! color = true
//!
//! [links]
//! extra_denylist = ["promo-nequi.click"]
//! extra_shorteners = ["s.id"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::services::{PinTimings, SignalTables};
use crate::paths;

/// chatshield configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Widget delays
    #[serde(default)]
    pub timing: TimingConfig,
    /// Terminal output preferences
    #[serde(default)]
    pub display: DisplayConfig,
    /// Additions to the link signal tables
    #[serde(default)]
    pub links: LinksConfig,
}

/// Widget delays, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long quiz feedback stays on screen
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u64,
    /// Duration of the PIN "sending" stage
    #[serde(default = "default_sending_ms")]
    pub sending_ms: u64,
    /// Gap between revealed PIN consequences
    #[serde(default = "default_reveal_ms")]
    pub reveal_ms: u64,
}

const fn default_feedback_ms() -> u64 {
    2500
}

const fn default_sending_ms() -> u64 {
    1500
}

const fn default_reveal_ms() -> u64 {
    800
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            feedback_ms: default_feedback_ms(),
            sending_ms: default_sending_ms(),
            reveal_ms: default_reveal_ms(),
        }
    }
}

/// Terminal output preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colorize human output
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

/// Extra hosts appended to the built-in link tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Hosts treated as known-bad
    #[serde(default)]
    pub extra_denylist: Vec<String>,
    /// Hosts treated as link shorteners
    #[serde(default)]
    pub extra_shorteners: Vec<String>,
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from the default location, or defaults if not usable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if the file is missing or invalid
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match fs::read_to_string(path).map_err(anyhow::Error::from).and_then(|content| {
            toml::from_str::<Self>(&content).map_err(anyhow::Error::from)
        }) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config at {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Same config with every delay set to zero
    #[must_use]
    pub const fn instant(mut self) -> Self {
        self.timing = TimingConfig {
            feedback_ms: 0,
            sending_ms: 0,
            reveal_ms: 0,
        };
        self
    }

    /// How long quiz feedback stays on screen
    #[must_use]
    pub const fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.timing.feedback_ms)
    }

    /// Timings of the PIN simulator
    #[must_use]
    pub const fn pin_timings(&self) -> PinTimings {
        PinTimings {
            sending: Duration::from_millis(self.timing.sending_ms),
            reveal_interval: Duration::from_millis(self.timing.reveal_ms),
        }
    }

    /// Built-in link tables plus the configured extras
    #[must_use]
    pub fn signal_tables(&self) -> SignalTables {
        SignalTables::default().extend(&self.links.extra_shorteners, &self.links.extra_denylist)
    }
}
