//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::content::{GOLDEN_RULE, HEURISTIC_NOTE};
use crate::core::models::{LinkVerdict, RiskLevel, Section, SectionKind};
use crate::core::services::PinStage;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of checking a link
#[derive(Debug, Serialize)]
pub struct LinkCheckResult {
    /// The verdict
    pub verdict: LinkVerdict,
    /// Spanish labels of the signals that fired
    pub reasons: Vec<&'static str>,
    /// Reminder that the check is a teaching heuristic
    pub note: &'static str,
}

impl From<LinkVerdict> for LinkCheckResult {
    fn from(verdict: LinkVerdict) -> Self {
        let reasons = verdict
            .assessment()
            .map(|a| a.signals.iter().map(|s| s.label()).collect())
            .unwrap_or_default();
        Self {
            verdict,
            reasons,
            note: HEURISTIC_NOTE,
        }
    }
}

/// A section as listed by `sections`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionInfo {
    /// 1-based position
    pub number: usize,
    /// Anchor id
    pub id: &'static str,
    /// Navigation label
    pub label: &'static str,
    /// Heading
    pub title: &'static str,
    /// Content kind
    pub kind: SectionKind,
    /// Whether the section hosts a widget
    pub interactive: bool,
}

impl SectionInfo {
    /// Describe `section` at 1-based position `number`
    #[must_use]
    pub const fn new(number: usize, section: &Section) -> Self {
        Self {
            number,
            id: section.id,
            label: section.label,
            title: section.title,
            kind: section.kind,
            interactive: section.kind.is_interactive(),
        }
    }
}

/// Result of listing sections
#[derive(Debug, Serialize)]
pub struct SectionList {
    /// Sections in order
    pub sections: Vec<SectionInfo>,
}

impl SectionList {
    /// Build the listing from the deck's sections
    #[must_use]
    pub fn new(sections: &[Section]) -> Self {
        Self {
            sections: sections
                .iter()
                .enumerate()
                .map(|(i, s)| SectionInfo::new(i + 1, s))
                .collect(),
        }
    }
}

/// Final score of a quiz or the classify game
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GameSummary {
    /// Which game was played
    pub game: &'static str,
    /// Correct answers
    pub score: usize,
    /// Number of items
    pub total: usize,
    /// Rounded percentage
    pub percent: u8,
}

/// Final state of a checklist or bingo board
#[derive(Debug, Serialize)]
pub struct BoardSummary {
    /// Which board was played
    pub board: &'static str,
    /// Marked items
    pub checked: usize,
    /// Number of items
    pub total: usize,
    /// Rounded percentage
    pub percent: u8,
    /// Whether the board is complete
    pub complete: bool,
    /// Completed bingo lines (empty for a checklist)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub completed_lines: Vec<usize>,
}

/// Final state of the PIN simulator
#[derive(Debug, Serialize)]
pub struct PinSummary {
    /// Stage the simulator ended in
    pub stage: PinStage,
    /// Consequences that were revealed
    pub consequences: Vec<&'static str>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Something that renders in both output modes
pub trait Render: Serialize {
    /// Human-readable text
    fn human(&self) -> String;

    /// Pretty JSON
    fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Print the result based on output mode
    fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => println!("{}", self.json()),
        }
    }
}

fn risk_badge(risk: RiskLevel) -> String {
    match risk {
        RiskLevel::High => risk.label().red().bold().to_string(),
        RiskLevel::Medium => risk.label().yellow().bold().to_string(),
        RiskLevel::Low => risk.label().green().to_string(),
    }
}

impl Render for LinkCheckResult {
    fn human(&self) -> String {
        let mut out = String::new();
        match &self.verdict {
            LinkVerdict::Invalid { .. } => {
                out.push_str(&"URL inválida".red().to_string());
                out.push('\n');
            },
            LinkVerdict::Assessed(a) => {
                out.push_str(&format!("Dominio: {}\n", a.host.bold()));
                if a.is_risky() {
                    out.push_str(&format!(
                        "Señales de riesgo detectadas ({})\n",
                        risk_badge(a.risk)
                    ));
                    for reason in &self.reasons {
                        out.push_str(&format!("  - {reason}\n"));
                    }
                } else {
                    out.push_str(&format!(
                        "No se detectaron señales comunes de riesgo ({})\n",
                        risk_badge(a.risk)
                    ));
                }
            },
        }
        out.push('\n');
        out.push_str(GOLDEN_RULE);
        out.push('\n');
        out.push_str(&self.note.dimmed().to_string());
        out
    }
}

impl Render for SectionList {
    fn human(&self) -> String {
        let mut out = String::from("Secciones:\n\n");
        for s in &self.sections {
            let marker = if s.interactive { " *" } else { "" };
            out.push_str(&format!(
                "  {:>2}. {:<12} {}{}\n",
                s.number,
                s.id.cyan(),
                s.title,
                marker
            ));
        }
        out.push_str("\n  * sección interactiva");
        out
    }
}

impl Render for GameSummary {
    fn human(&self) -> String {
        let line = format!("Puntaje: {}/{} ({}%)", self.score, self.total, self.percent);
        if self.score == self.total && self.total > 0 {
            line.green().bold().to_string()
        } else {
            line.bold().to_string()
        }
    }
}

impl Render for BoardSummary {
    fn human(&self) -> String {
        let mut out = format!("Progreso: {}/{} ({}%)", self.checked, self.total, self.percent);
        if self.complete {
            let done = if self.completed_lines.is_empty() { "¡Completo!" } else { "¡Bingo!" };
            out.push_str(&format!(" {}", done.green().bold()));
        }
        out
    }
}

impl Render for PinSummary {
    fn human(&self) -> String {
        if self.consequences.is_empty() {
            return "No compartiste ningún PIN.".to_string();
        }
        let mut out = String::from("Lo que pasó después de compartir el PIN:\n");
        for (i, c) in self.consequences.iter().enumerate() {
            out.push_str(&format!("  {}. {c}\n", i + 1));
        }
        out.trim_end().to_string()
    }
}

impl Render for OperationResult {
    fn human(&self) -> String {
        if self.success {
            self.message.clone()
        } else {
            self.message.red().to_string()
        }
    }
}
