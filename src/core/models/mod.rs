//! Domain models for chatshield
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RiskLevel`] - How dangerous a link looks
//! - [`Signal`] - A red flag detected in a hostname
//! - [`LinkVerdict`] - The outcome of analysing a link
//! - [`Section`] - One stop of the presentation

mod section;
mod severity;
mod signal;
mod verdict;

pub use section::{Section, SectionKind};
pub use severity::RiskLevel;
pub use signal::{SIGNAL_RULES, Signal, SignalRule};
pub use verdict::{LinkAssessment, LinkVerdict};
