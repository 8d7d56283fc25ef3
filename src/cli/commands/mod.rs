//! Command implementations
//!
//! Each subcommand gets its own module; [`AppContext`] carries what they share.

mod browse;
mod check_url;
mod export;
mod play;
mod present;
#[cfg(feature = "ui")]
mod serve;

use std::io::{self, StdinLock, Write};

use chatshield::config::Config;
use chatshield::core::services::{Clock, LinkAnalyzer, ManualClock, SystemClock};
use chatshield::output::OutputMode;
use chatshield::session::Console;

pub use browse::{sections, show};
pub use check_url::check_url;
pub use export::{export, print};
pub use play::{bingo, checklist, classify, pin, quiz};
pub use present::present;
#[cfg(feature = "ui")]
pub use serve::serve;

/// Settings shared by every command
#[derive(Debug)]
pub struct AppContext {
    config: Config,
    mode: OutputMode,
    instant: bool,
}

impl AppContext {
    /// Bundle the loaded configuration with the global flags
    pub const fn new(config: Config, mode: OutputMode, instant: bool) -> Self {
        Self {
            config,
            mode,
            instant,
        }
    }

    /// Loaded configuration
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Requested output mode
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Clock for interactive sessions; `--instant` never sleeps
    pub fn clock(&self) -> Box<dyn Clock> {
        if self.instant {
            Box::new(ManualClock::new())
        } else {
            Box::new(SystemClock::new())
        }
    }

    /// Link analyzer built from the default tables plus the configured extras
    pub fn analyzer(&self) -> anyhow::Result<LinkAnalyzer> {
        Ok(LinkAnalyzer::new(&self.config.signal_tables())?)
    }

    /// Console over stdin
    ///
    /// In JSON mode prompts go to stderr so stdout only carries the final document.
    pub fn console<'c>(
        &self,
        clock: &'c dyn Clock,
    ) -> Console<'c, StdinLock<'static>, Box<dyn Write>> {
        let output: Box<dyn Write> = match self.mode {
            OutputMode::Human => Box::new(io::stdout()),
            OutputMode::Json => Box::new(io::stderr()),
        };
        Console::new(io::stdin().lock(), output, clock)
    }
}
