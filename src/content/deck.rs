use crate::core::models::{Section, SectionKind};

/// Presentation sections in order
pub const SECTIONS: [Section; 10] = [
    Section {
        id: "portada",
        label: "Inicio",
        title: "Riesgos en WhatsApp y SMS",
        kind: SectionKind::Cover,
    },
    Section {
        id: "contexto",
        label: "Contexto",
        title: "Contexto e Importancia",
        kind: SectionKind::Context,
    },
    Section {
        id: "riesgos-wa",
        label: "WhatsApp",
        title: "Riesgos en WhatsApp",
        kind: SectionKind::WhatsappRisks,
    },
    Section {
        id: "riesgos-sms",
        label: "SMS",
        title: "Riesgos en SMS",
        kind: SectionKind::SmsRisks,
    },
    Section {
        id: "flujo",
        label: "Decisión",
        title: "Flujo de Decisión ante Mensajes Sospechosos",
        kind: SectionKind::DecisionFlow,
    },
    Section {
        id: "plan",
        label: "Respuesta",
        title: "Plan de Respuesta ante Incidentes",
        kind: SectionKind::ResponsePlan,
    },
    Section {
        id: "quiz",
        label: "Quiz",
        title: "Quiz de Conocimientos",
        kind: SectionKind::Quiz,
    },
    Section {
        id: "simuladores",
        label: "Simuladores",
        title: "Simuladores Interactivos",
        kind: SectionKind::Simulators,
    },
    Section {
        id: "buenas",
        label: "Prácticas",
        title: "Implementación de Buenas Prácticas",
        kind: SectionKind::Practices,
    },
    Section {
        id: "glosario",
        label: "Glosario",
        title: "Glosario de Términos",
        kind: SectionKind::Glossary,
    },
];

/// Presentation authors
pub const AUTHORS: [&str; 3] = [
    "Adriana Zoraya Flórez Sandoval",
    "Francy Daniela Olmos",
    "Julián Gdo Abril Herrera",
];

/// Hosting institution
pub const INSTITUTION: &str = "Universidad de Boyacá";

/// Faculty and program line
pub const PROGRAM: &str = "Facultad de Ciencias e Ingeniería · Ingeniería de Sistemas · Tunja";

/// Topic tags on the cover
pub const COVER_TAGS: [&str; 5] = ["WhatsApp", "SMS", "Phishing", "PIN", "Buenas prácticas"];
