//! Static presentation content
//!
//! Every table here is fixed at compile time and never mutated. Text is in
//! Spanish, the language of the audience.

mod deck;
mod drills;
mod guidance;
mod risks;

use serde::Serialize;

pub use deck::{AUTHORS, COVER_TAGS, INSTITUTION, PROGRAM, SECTIONS};
pub use drills::{BINGO_CELLS, BINGO_SIDE, CLASSIFY_MESSAGES, MessageKind, PIN_CONSEQUENCES, QUIZ};
pub use guidance::{
    CLICKED_STEPS, DECISION_FLOW, GLOSSARY, GOLDEN_RULE, HEURISTIC_NOTE, PRACTICES, SUSPECT_STEPS,
};
pub use risks::{
    CONTEXT_LEVELS, CONTEXT_REASONS, CONTEXT_SUMMARY, SMS_INDICATORS, SMS_PRACTICES, SMS_VECTORS,
    WHATSAPP_RISKS,
};

/// Category a risk belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// Links and attachments that deliver phishing or malware
    Malware,
    /// Control of the account or session
    Account,
    /// Harm to the person behind the account
    Personal,
}

impl RiskCategory {
    /// Spanish tag shown on the card
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Malware => "Phishing/Malware",
            Self::Account => "Cuenta",
            Self::Personal => "Personal",
        }
    }
}

/// A WhatsApp risk card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskCard {
    /// Card title
    pub title: &'static str,
    /// Short description
    pub description: &'static str,
    /// Concrete example, revealed on demand
    pub example: &'static str,
    /// Category tag
    pub category: RiskCategory,
}

/// An SMS attack vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vector {
    /// Vector name
    pub title: &'static str,
    /// Short description
    pub description: &'static str,
    /// Tags shown as pills
    pub tags: &'static [&'static str],
}

/// A titled step or item with a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Step title
    pub title: &'static str,
    /// Step description
    pub description: &'static str,
}

/// A glossary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    /// Term
    pub term: &'static str,
    /// Definition
    pub definition: &'static str,
}
