use super::{RiskCard, RiskCategory, Step, Vector};

/// One-paragraph answer to "why does this matter?"
pub const CONTEXT_SUMMARY: &str = "Los funcionarios manejan información personal y datos de la \
     universidad en conversaciones cotidianas. Un acceso no autorizado puede poner en riesgo a la \
     persona y a la institución.";

/// Reasons the topic matters
pub const CONTEXT_REASONS: [&str; 3] = [
    "Protección de datos personales y reputación profesional",
    "Prevención de incidentes que afecten la imagen institucional",
    "Continuidad operativa y reducción de fraudes",
];

/// Levels at which the risks show up
pub const CONTEXT_LEVELS: [Step; 3] = [
    Step {
        title: "Ciberseguridad",
        description: "Enlaces, archivos, secuestro de sesión, propagación de malware",
    },
    Step {
        title: "Riesgos personales",
        description: "Suplantación, extorsión, sanciones internas",
    },
    Step {
        title: "SMS fraudulentos",
        description: "Smishing, PIN, urgencia engañosa, spoofing, acortadores",
    },
];

/// WhatsApp risk cards
pub const WHATSAPP_RISKS: [RiskCard; 6] = [
    RiskCard {
        title: "Links maliciosos (phishing/malware)",
        description: "Enlaces que aparentan ser de fuentes confiables. Buscan robar datos o \
                      instalar programas dañinos.",
        example: "Un link que promete 'verificación de cuenta' y te pide usuario/clave.",
        category: RiskCategory::Malware,
    },
    RiskCard {
        title: "Archivos adjuntos infectados",
        description: "PDF, Word o APK enviados por WhatsApp pueden incluir código malicioso.",
        example: "Un PDF que parece comunicado oficial pero contiene malware.",
        category: RiskCategory::Malware,
    },
    RiskCard {
        title: "Secuestro de sesión (WhatsApp Web)",
        description: "Si dejas la sesión abierta en un computador compartido, otra persona \
                      puede usarla.",
        example: "Abriste WhatsApp Web en un laboratorio y no cerraste sesión.",
        category: RiskCategory::Account,
    },
    RiskCard {
        title: "Propagación automática",
        description: "Tu cuenta comprometida reenvía virus a contactos de la universidad.",
        example: "Mensajes masivos con el mismo enlace sospechoso.",
        category: RiskCategory::Account,
    },
    RiskCard {
        title: "Suplantación de identidad",
        description: "Envían mensajes falsos desde tu cuenta, afectando reputación.",
        example: "Piden dinero a un colega haciéndose pasar por ti.",
        category: RiskCategory::Personal,
    },
    RiskCard {
        title: "Acoso o extorsión",
        description: "Con datos privados, presionan o chantajean.",
        example: "Amenazan con publicar información si no pagas.",
        category: RiskCategory::Personal,
    },
];

const SMS_TAGS: &[&str] = &["SMS", "Enlaces", "Urgencia"];

/// SMS attack vectors
pub const SMS_VECTORS: [Vector; 5] = [
    Vector {
        title: "Smishing (phishing por SMS)",
        description: "Mensajes que dirigen a páginas falsas para capturar datos.",
        tags: SMS_TAGS,
    },
    Vector {
        title: "Solicitud de PIN/códigos",
        description: "Piden reenviar códigos de verificación para tomar control de cuentas.",
        tags: SMS_TAGS,
    },
    Vector {
        title: "Urgencia engañosa",
        description: "'Bloquearemos su cuenta en 24h' para que actúes sin verificar.",
        tags: SMS_TAGS,
    },
    Vector {
        title: "Spoofing de remitente",
        description: "El SMS aparenta venir de un número/nombre confiable.",
        tags: SMS_TAGS,
    },
    Vector {
        title: "Enlaces acortados/extraños",
        description: "Ocultan el destino real o usan dominios con caracteres confusos.",
        tags: SMS_TAGS,
    },
];

/// Signs that an SMS is fraudulent
pub const SMS_INDICATORS: [&str; 5] = [
    "Remitente extraño o que cambia entre números",
    "Ortografía/gramática deficiente o traducciones raras",
    "Promesas o amenazas con tiempo limitado",
    "Enlaces acortados o dominios que imitan marcas",
    "Solicitan datos, pagos o PIN",
];

/// Good practices specific to SMS
pub const SMS_PRACTICES: [&str; 5] = [
    "No respondas a mensajes sospechosos; bloquea y reporta",
    "Verifica en el sitio oficial o por teléfono institucional",
    "Desconfía de enlaces en campañas o promociones inesperadas",
    "Activa filtros anti-spam del dispositivo/operador",
    "Educa a compañeros para reducir el riesgo colectivo",
];
