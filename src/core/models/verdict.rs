//! Link verdicts

use serde::Serialize;

use super::{RiskLevel, Signal};

/// Outcome of analysing a candidate link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LinkVerdict {
    /// The input could not be parsed as an absolute URL with a host
    Invalid {
        /// The raw input
        input: String,
    },
    /// The input parsed and its host was checked against every signal
    Assessed(LinkAssessment),
}

/// Signals found on a parsed link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkAssessment {
    /// The raw input
    pub input: String,
    /// Normalized href after parsing
    pub url: String,
    /// Lowercase hostname
    pub host: String,
    /// Signals that fired, in table order
    pub signals: Vec<Signal>,
    /// Aggregate risk
    pub risk: RiskLevel,
}

impl LinkVerdict {
    /// Whether the input was rejected before any classification
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// Risk level, absent for invalid input
    #[must_use]
    pub const fn risk(&self) -> Option<RiskLevel> {
        match self {
            Self::Invalid { .. } => None,
            Self::Assessed(a) => Some(a.risk),
        }
    }

    /// The assessment, absent for invalid input
    #[must_use]
    pub const fn assessment(&self) -> Option<&LinkAssessment> {
        match self {
            Self::Invalid { .. } => None,
            Self::Assessed(a) => Some(a),
        }
    }
}

impl LinkAssessment {
    /// Whether any signal fired
    #[must_use]
    pub fn is_risky(&self) -> bool {
        !self.signals.is_empty()
    }

    /// Whether a given signal fired
    #[must_use]
    pub fn has(&self, signal: Signal) -> bool {
        self.signals.contains(&signal)
    }
}
