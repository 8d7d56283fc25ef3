//! Line-oriented interactive sessions
//!
//! Each session drives one widget from a [`Console`]: it reads commands line by
//! line, feeds them to the widget's state machine and waits on the console's
//! [`Clock`] whenever the widget has a timer pending. End of input always ends
//! the session cleanly, so every session can be scripted through stdin.

mod boards;
mod links;
mod pin;
mod presenter;
mod quiz;

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::core::services::Clock;

pub use boards::{run_bingo, run_checklist};
pub use links::run_link_checker;
pub use pin::run_pin;
pub use presenter::{Presenter, PresenterCommand};
pub use quiz::{Answer, run_quiz};

/// Input, output and time source of a session
pub struct Console<'c, R, W> {
    input: R,
    output: W,
    clock: &'c dyn Clock,
}

impl<R, W> std::fmt::Debug for Console<'_, R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").field("now", &self.clock.now()).finish_non_exhaustive()
    }
}

impl<'c, R: BufRead, W: Write> Console<'c, R, W> {
    /// Wrap an input, an output and a clock
    pub const fn new(input: R, output: W, clock: &'c dyn Clock) -> Self {
        Self {
            input,
            output,
            clock,
        }
    }

    /// Current time on the session clock
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Block until `deadline`
    pub fn wait_until(&self, deadline: Duration) {
        self.clock.sleep_until(deadline);
    }

    /// Write one line
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Write a prompt and read the answer, trimmed; `None` at end of input
    pub fn ask(&mut self, prompt: impl Display) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Give back the output, e.g. to inspect it in tests
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Whether `line` asks to leave the current session
#[must_use]
pub fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "q" | "quit" | "salir" | "exit")
}
