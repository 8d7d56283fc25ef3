//! Presentation sections

use serde::Serialize;

/// What a section shows, and which widget it hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Title page with authors
    Cover,
    /// Why the topic matters
    Context,
    /// WhatsApp risk cards
    WhatsappRisks,
    /// SMS vectors, indicators and practices
    SmsRisks,
    /// Quick decision flow
    DecisionFlow,
    /// Incident response plan
    ResponsePlan,
    /// True/false quiz and the classify-message game
    Quiz,
    /// PIN simulator and link analyzer
    Simulators,
    /// Good practices checklist and red-flag bingo
    Practices,
    /// Glossary of terms
    Glossary,
}

/// One stop of the presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Anchor id (e.g. "quiz")
    pub id: &'static str,
    /// Short navigation label
    pub label: &'static str,
    /// Heading
    pub title: &'static str,
    /// Content kind
    pub kind: SectionKind,
}

impl SectionKind {
    /// Whether the section hosts an interactive widget
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::WhatsappRisks | Self::Quiz | Self::Simulators | Self::Practices)
    }
}
