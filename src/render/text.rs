//! Plain-text rendering of sections
//!
//! Used by the terminal presenter and `show`. No colors here; callers
//! decorate headings themselves.

use crate::content::{
    AUTHORS, CLICKED_STEPS, CONTEXT_LEVELS, CONTEXT_REASONS, CONTEXT_SUMMARY, COVER_TAGS,
    DECISION_FLOW, GLOSSARY, INSTITUTION, PRACTICES, PROGRAM, SMS_INDICATORS, SMS_PRACTICES,
    SMS_VECTORS, SUSPECT_STEPS, Step, WHATSAPP_RISKS,
};
use crate::core::models::{Section, SectionKind};

fn bullets(out: &mut String, items: &[&str]) {
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}

fn numbered(out: &mut String, steps: &[Step]) {
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n     {}\n", i + 1, step.title, step.description));
    }
}

/// Body of `section`
///
/// On the WhatsApp risks section, `open` selects the risk card whose example
/// is expanded.
#[must_use]
pub fn section_body(section: &Section, open: Option<usize>) -> String {
    let mut out = String::new();
    match section.kind {
        SectionKind::Cover => {
            out.push_str(&format!("{INSTITUTION}\n{PROGRAM}\n\n"));
            out.push_str(&format!("{}\n\n", COVER_TAGS.join(" · ")));
            out.push_str("Presentado por:\n");
            bullets(&mut out, &AUTHORS);
        },
        SectionKind::Context => {
            out.push_str(CONTEXT_SUMMARY);
            out.push_str("\n\n¿Por qué importa?\n");
            bullets(&mut out, &CONTEXT_REASONS);
            out.push_str("\nNiveles de riesgo:\n");
            numbered(&mut out, &CONTEXT_LEVELS);
        },
        SectionKind::WhatsappRisks => {
            for (i, risk) in WHATSAPP_RISKS.iter().enumerate() {
                out.push_str(&format!(
                    "  {}. {} [{}]\n     {}\n",
                    i + 1,
                    risk.title,
                    risk.category.label(),
                    risk.description
                ));
                if open == Some(i) {
                    out.push_str(&format!("     Ejemplo: {}\n", risk.example));
                }
            }
            out.push_str("\n(e <n> muestra el ejemplo de un riesgo)\n");
        },
        SectionKind::SmsRisks => {
            out.push_str("Vectores de ataque:\n");
            for vector in &SMS_VECTORS {
                out.push_str(&format!(
                    "  - {}: {} ({})\n",
                    vector.title,
                    vector.description,
                    vector.tags.join(", ")
                ));
            }
            out.push_str("\nIndicadores de fraude:\n");
            bullets(&mut out, &SMS_INDICATORS);
            out.push_str("\nBuenas prácticas:\n");
            bullets(&mut out, &SMS_PRACTICES);
        },
        SectionKind::DecisionFlow => numbered(&mut out, &DECISION_FLOW),
        SectionKind::ResponsePlan => {
            out.push_str("Si sospechas de fraude:\n");
            bullets(&mut out, &SUSPECT_STEPS);
            out.push_str("\nSi ya hiciste clic:\n");
            bullets(&mut out, &CLICKED_STEPS);
        },
        SectionKind::Quiz => {
            out.push_str("Quiz de verdadero o falso y juego \"¿seguro o phishing?\".\n");
            out.push_str("(play inicia el quiz; play classify inicia el juego)\n");
        },
        SectionKind::Simulators => {
            out.push_str("Simulador de PIN y analizador de enlaces.\n");
            out.push_str("(play inicia el simulador de PIN; play link analiza enlaces)\n");
        },
        SectionKind::Practices => {
            bullets(&mut out, &PRACTICES);
            out.push_str("\n(play abre el checklist; play bingo abre el bingo de alertas)\n");
        },
        SectionKind::Glossary => {
            for entry in &GLOSSARY {
                out.push_str(&format!("  {}: {}\n", entry.term, entry.definition));
            }
        },
    }
    out
}

/// Heading line of `section`, e.g. `[3/10] Riesgos en WhatsApp`
#[must_use]
pub fn heading(section: &Section, number: usize, total: usize) -> String {
    format!("[{number}/{total}] {}", section.title)
}
