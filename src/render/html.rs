//! Printable HTML rendering of the whole deck
//!
//! One self-contained page: every section in order, interactive widgets shown
//! in their static, answer-key form, and a print stylesheet that puts each
//! section on its own page.

use chrono::{DateTime, Local};

use crate::content::{
    AUTHORS, BINGO_CELLS, BINGO_SIDE, CLASSIFY_MESSAGES, CLICKED_STEPS, CONTEXT_LEVELS,
    CONTEXT_REASONS, CONTEXT_SUMMARY, COVER_TAGS, DECISION_FLOW, GLOSSARY, GOLDEN_RULE,
    HEURISTIC_NOTE, INSTITUTION, PIN_CONSEQUENCES, PRACTICES, PROGRAM, QUIZ, SECTIONS,
    SMS_INDICATORS, SMS_PRACTICES, SMS_VECTORS, SUSPECT_STEPS, Step, WHATSAPP_RISKS,
};
use crate::core::models::{SIGNAL_RULES, Section, SectionKind};

/// Escape text for HTML element and attribute content
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn list(out: &mut String, items: &[&str]) {
    out.push_str("<ul>\n");
    for item in items {
        out.push_str(&format!("<li>{}</li>\n", escape(item)));
    }
    out.push_str("</ul>\n");
}

fn steps(out: &mut String, items: &[Step]) {
    out.push_str("<ol>\n");
    for step in items {
        out.push_str(&format!(
            "<li><strong>{}</strong><br>{}</li>\n",
            escape(step.title),
            escape(step.description)
        ));
    }
    out.push_str("</ol>\n");
}

fn section_html(out: &mut String, section: &Section) {
    match section.kind {
        SectionKind::Cover => {
            out.push_str(&format!(
                "<p class=\"institution\">{}<br>{}</p>\n",
                escape(INSTITUTION),
                escape(PROGRAM)
            ));
            out.push_str("<p class=\"tags\">");
            for tag in &COVER_TAGS {
                out.push_str(&format!("<span>{}</span>", escape(tag)));
            }
            out.push_str("</p>\n");
            list(out, &AUTHORS);
        },
        SectionKind::Context => {
            out.push_str(&format!("<p>{}</p>\n", escape(CONTEXT_SUMMARY)));
            list(out, &CONTEXT_REASONS);
            steps(out, &CONTEXT_LEVELS);
        },
        SectionKind::WhatsappRisks => {
            for risk in &WHATSAPP_RISKS {
                out.push_str(&format!(
                    "<div class=\"card\"><h3>{} <small>{}</small></h3><p>{}</p>\
                     <p class=\"example\">Ejemplo: {}</p></div>\n",
                    escape(risk.title),
                    escape(risk.category.label()),
                    escape(risk.description),
                    escape(risk.example)
                ));
            }
        },
        SectionKind::SmsRisks => {
            out.push_str("<h3>Vectores de ataque</h3>\n<ul>\n");
            for vector in &SMS_VECTORS {
                out.push_str(&format!(
                    "<li><strong>{}</strong>: {} <em>({})</em></li>\n",
                    escape(vector.title),
                    escape(vector.description),
                    escape(&vector.tags.join(", "))
                ));
            }
            out.push_str("</ul>\n<h3>Indicadores de fraude</h3>\n");
            list(out, &SMS_INDICATORS);
            out.push_str("<h3>Buenas prácticas</h3>\n");
            list(out, &SMS_PRACTICES);
        },
        SectionKind::DecisionFlow => steps(out, &DECISION_FLOW),
        SectionKind::ResponsePlan => {
            out.push_str("<h3>Si sospechas de fraude</h3>\n");
            list(out, &SUSPECT_STEPS);
            out.push_str("<h3>Si ya hiciste clic</h3>\n");
            list(out, &CLICKED_STEPS);
        },
        SectionKind::Quiz => {
            out.push_str("<h3>Verdadero o falso</h3>\n<ol>\n");
            for item in &QUIZ {
                let answer = if item.answer { "Verdadero" } else { "Falso" };
                out.push_str(&format!(
                    "<li>{}<br><span class=\"answer\">{}: {}</span></li>\n",
                    escape(item.prompt),
                    answer,
                    escape(item.explanation)
                ));
            }
            out.push_str("</ol>\n<h3>¿Seguro o phishing?</h3>\n<ol>\n");
            for item in &CLASSIFY_MESSAGES {
                out.push_str(&format!(
                    "<li>&laquo;{}&raquo;<br><span class=\"answer\">{}: {}</span></li>\n",
                    escape(item.prompt),
                    item.answer,
                    escape(item.explanation)
                ));
            }
            out.push_str("</ol>\n");
        },
        SectionKind::Simulators => {
            out.push_str("<h3>Simulador de PIN</h3>\n<p>Si compartes tu código:</p>\n");
            out.push_str("<ol>\n");
            for consequence in &PIN_CONSEQUENCES {
                out.push_str(&format!("<li>{}</li>\n", escape(consequence)));
            }
            out.push_str("</ol>\n<h3>Señales en un enlace</h3>\n<ul>\n");
            for rule in &SIGNAL_RULES {
                out.push_str(&format!(
                    "<li>{} <small>({})</small></li>\n",
                    escape(rule.label),
                    escape(rule.severity.label())
                ));
            }
            out.push_str("</ul>\n");
            out.push_str(&format!(
                "<p class=\"rule\">{}</p>\n<p class=\"note\">{}</p>\n",
                escape(GOLDEN_RULE),
                escape(HEURISTIC_NOTE)
            ));
        },
        SectionKind::Practices => {
            out.push_str("<ul class=\"checklist\">\n");
            for practice in &PRACTICES {
                out.push_str(&format!("<li>&#9744; {}</li>\n", escape(practice)));
            }
            out.push_str("</ul>\n<h3>Bingo de alertas</h3>\n<table class=\"bingo\">\n");
            for row in BINGO_CELLS.chunks(BINGO_SIDE) {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str(&format!("<td>{}</td>", escape(cell)));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</table>\n");
        },
        SectionKind::Glossary => {
            out.push_str("<dl>\n");
            for entry in &GLOSSARY {
                out.push_str(&format!(
                    "<dt>{}</dt><dd>{}</dd>\n",
                    escape(entry.term),
                    escape(entry.definition)
                ));
            }
            out.push_str("</dl>\n");
        },
    }
}

/// Render the whole deck as a printable page
#[must_use]
pub fn document(generated: DateTime<Local>) -> String {
    let mut out = String::from(HEAD);

    out.push_str("<nav>\n");
    for section in &SECTIONS {
        out.push_str(&format!(
            "<a href=\"#{}\">{}</a>\n",
            escape(section.id),
            escape(section.label)
        ));
    }
    out.push_str("</nav>\n<main>\n");

    for section in &SECTIONS {
        out.push_str(&format!(
            "<section id=\"{}\">\n<h2>{}</h2>\n",
            escape(section.id),
            escape(section.title)
        ));
        section_html(&mut out, section);
        out.push_str("</section>\n");
    }

    out.push_str(&format!(
        "</main>\n<footer>{} &middot; Generado el {}</footer>\n</body>\n</html>\n",
        escape(INSTITUTION),
        generated.format("%Y-%m-%d %H:%M")
    ));
    out
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Riesgos en WhatsApp y SMS</title>
<style>
body { font-family: system-ui, sans-serif; color: #1e293b; margin: 0; line-height: 1.5; }
nav { position: sticky; top: 0; background: #0f172a; padding: .5rem 1rem; }
nav a { color: #e2e8f0; margin-right: 1rem; text-decoration: none; font-size: .9rem; }
main { max-width: 60rem; margin: 0 auto; padding: 1rem; }
section { padding: 1.5rem 0; border-bottom: 1px solid #e2e8f0; }
.card { border: 1px solid #cbd5e1; border-radius: .75rem; padding: .75rem 1rem; margin: .5rem 0; }
.example, .answer, .note { color: #475569; font-size: .9rem; }
.tags span { background: #e0e7ff; border-radius: 1rem; padding: .1rem .6rem; margin-right: .4rem; }
.rule { font-weight: 600; }
.checklist { list-style: none; padding-left: 0; }
.bingo td { border: 1px solid #94a3b8; padding: .75rem; width: 33%; text-align: center; }
footer { text-align: center; color: #64748b; font-size: .8rem; padding: 1rem; }
@media print {
  nav { display: none; }
  section { page-break-after: always; border: none; }
  .card { break-inside: avoid; }
}
</style>
</head>
<body>
"#;
