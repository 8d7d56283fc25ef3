//! Presentation services
//!
//! Pure logic behind the interactive parts of the presentation:
//!
//! - [`LinkAnalyzer`] - heuristic link risk check
//! - [`Quiz`] / [`QuizSession`] - sequential quiz with timed feedback
//! - [`Checklist`] / [`Bingo`] - toggle boards
//! - [`PinSimulator`] - staged PIN-sharing dramatization
//! - [`Deck`] / [`Accordion`] - navigation
//! - [`Timeline`] - cancellable delayed events driving the timed widgets

mod checklist;
mod deck;
mod evaluator;
mod pin;
mod quiz;
mod schedule;

use thiserror::Error;

pub use checklist::{Bingo, Checklist};
pub use deck::{Accordion, Deck, DeckError};
pub use evaluator::{BRANDS, DENYLIST, LinkAnalyzer, SHORTENERS, SignalTables, TableError};
pub use pin::{PIN_LENGTH, PinError, PinSimulator, PinStage, PinTimings};
pub use quiz::{Feedback, Quiz, QuizItem, QuizSession, QuizState};
pub use schedule::{Clock, ManualClock, SystemClock, Timeline};

/// Errors from widget state machines
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum WidgetError {
    /// Index outside the widget
    #[error("item {index} out of range (widget has {len} items)")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Number of items
        len: usize,
    },

    /// Feedback is on screen; input is disabled until it clears
    #[error("waiting for feedback to clear")]
    Busy,

    /// A bingo board needs at least one non-empty line
    #[error("bingo board has no lines")]
    NoLines,
}

/// `part * 100 / total`, rounded half up; 0 when `total` is 0
#[must_use]
pub fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let value = (part.min(total) * 200 + total) / (2 * total);
    u8::try_from(value).unwrap_or(100)
}
