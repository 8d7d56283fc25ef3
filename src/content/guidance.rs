use super::{GlossaryEntry, Step};

/// Quick decision flow for a suspicious message
pub const DECISION_FLOW: [Step; 6] = [
    Step {
        title: "¿Esperabas el mensaje?",
        description: "Si no, sospecha inmediatamente",
    },
    Step {
        title: "Revisa el remitente",
        description: "Nombre raro, número desconocido o errores → desconfía",
    },
    Step {
        title: "No abras enlaces",
        description: "Visita el sitio oficial escribiendo la dirección manualmente",
    },
    Step {
        title: "Nunca compartas PIN/códigos",
        description: "Ninguna entidad seria los solicita por chat/SMS",
    },
    Step {
        title: "Reporta y bloquea",
        description: "El número o chat si es sospechoso",
    },
    Step {
        title: "Si ya hiciste clic",
        description: "Desconecta internet, cambia contraseñas y comunica al área responsable",
    },
];

/// What to do when fraud is suspected
pub const SUSPECT_STEPS: [&str; 4] = [
    "No interactúes con el mensaje; no hagas clic",
    "Toma capturas de pantalla como prueba",
    "Bloquea y reporta el número o chat",
    "Informa al canal institucional designado",
];

/// What to do after clicking a malicious link
pub const CLICKED_STEPS: [&str; 4] = [
    "Activa modo avión / desconecta el equipo comprometido",
    "Cambia contraseñas y habilita verificación en dos pasos",
    "Revisa movimientos inusuales (correo, banca, redes)",
    "Comunica el incidente al área responsable para apoyo",
];

/// Good practices checklist items
pub const PRACTICES: [&str; 8] = [
    "Activar verificación en dos pasos en WhatsApp",
    "Cerrar sesión en WhatsApp Web tras usar computadores compartidos",
    "No abrir enlaces sospechosos en WhatsApp o SMS",
    "No compartir PIN ni contraseñas bajo ninguna circunstancia",
    "Separar lo personal de lo institucional: usar canales oficiales",
    "Bloquear/reportar números sospechosos y activar filtros anti-spam",
    "Mantener el sistema y las apps actualizados desde tiendas oficiales",
    "Respaldar (backup) periódicamente la información relevante",
];

/// Glossary of terms
pub const GLOSSARY: [GlossaryEntry; 7] = [
    GlossaryEntry {
        term: "Phishing",
        definition: "Engaño para que entregues datos (contraseñas, tarjetas) haciéndose pasar \
                     por alguien confiable.",
    },
    GlossaryEntry {
        term: "Smishing",
        definition: "Phishing por SMS.",
    },
    GlossaryEntry {
        term: "Malware",
        definition: "Software malicioso que daña o roba información.",
    },
    GlossaryEntry {
        term: "Secuestro de sesión",
        definition: "Alguien reutiliza tu sesión abierta para entrar sin tu clave.",
    },
    GlossaryEntry {
        term: "Spoofing",
        definition: "Falsificación de identidad del remitente.",
    },
    GlossaryEntry {
        term: "Punycode",
        definition: "Codificación ASCII de dominios con caracteres especiales; se abusa de ella \
                     para imitar dominios confiables.",
    },
    GlossaryEntry {
        term: "Acortador de enlaces",
        definition: "Dominio que redirige una URL corta a un destino oculto.",
    },
];

/// Reminder shown with every link verdict
pub const GOLDEN_RULE: &str = "Regla de oro: si no esperabas el mensaje, no hagas clic. Ingresa \
                               manualmente al sitio oficial.";

/// Disclaimer shown with every link verdict
pub const HEURISTIC_NOTE: &str = "Heurística educativa: detecta señales comunes, no garantiza que \
                                  un enlace sea seguro.";
