use serde::Serialize;

use crate::core::services::QuizItem;

/// How a sample message should be classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// A legitimate message
    Safe,
    /// A phishing or smishing attempt
    Phishing,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "Seguro"),
            Self::Phishing => write!(f, "Phishing"),
        }
    }
}

/// True/false quiz
pub const QUIZ: [QuizItem<bool>; 4] = [
    QuizItem {
        prompt: "Dejar WhatsApp Web abierto en un computador compartido es seguro si confías en \
                 el lugar.",
        answer: false,
        explanation: "La sesión puede quedar disponible para cualquiera.",
    },
    QuizItem {
        prompt: "Si un SMS pide 'confirmar en 24h' con un enlace, puede ser fraude.",
        answer: true,
        explanation: "La urgencia es una táctica común.",
    },
    QuizItem {
        prompt: "Compartir un PIN de verificación por chat es aceptable si lo solicita 'soporte'.",
        answer: false,
        explanation: "Nadie legítimo solicita tu PIN.",
    },
    QuizItem {
        prompt: "Un contacto conocido no garantiza que un archivo sea seguro.",
        answer: true,
        explanation: "Su cuenta pudo ser comprometida.",
    },
];

/// Sample messages for the classify game
pub const CLASSIFY_MESSAGES: [QuizItem<MessageKind>; 6] = [
    QuizItem {
        prompt: "Bancolombia: su cuenta sera bloqueada en 24h. Confirme sus datos en \
                 http://bancolombia-seguro.co/validar",
        answer: MessageKind::Phishing,
        explanation: "Urgencia, marca con guion y un enlace que pide datos.",
    },
    QuizItem {
        prompt: "Tu código de WhatsApp es 482-913. No lo compartas con nadie.",
        answer: MessageKind::Safe,
        explanation: "Es el aviso normal de WhatsApp: no pide nada y recuerda no compartirlo.",
    },
    QuizItem {
        prompt: "Hola, soy de soporte de WhatsApp. Te envié un código por error, ¿me lo \
                 reenvías?",
        answer: MessageKind::Phishing,
        explanation: "Nadie legítimo solicita tu PIN o código de verificación.",
    },
    QuizItem {
        prompt: "Recordatorio: la reunión de facultad es el jueves a las 10:00 en el auditorio. \
                 Detalles en el correo institucional.",
        answer: MessageKind::Safe,
        explanation: "No hay enlaces, urgencia ni solicitud de datos; remite al canal oficial.",
    },
    QuizItem {
        prompt: "¡Ganaste un bono de $500.000! Reclámalo hoy en https://bit.ly/bono-udb",
        answer: MessageKind::Phishing,
        explanation: "Premio inesperado, plazo corto y enlace acortado que oculta el destino.",
    },
    QuizItem {
        prompt: "Mamá, cambié de número. Guarda este y transfiéreme urgente, luego te explico.",
        answer: MessageKind::Phishing,
        explanation: "Suplantación de un contacto con urgencia y petición de dinero.",
    },
];

/// Side length of the bingo board
pub const BINGO_SIDE: usize = 3;

/// Red-flag cells of the bingo card, row by row
pub const BINGO_CELLS: [&str; BINGO_SIDE * BINGO_SIDE] = [
    "Urgencia de 24h",
    "Pide tu PIN",
    "Enlace acortado",
    "Remitente desconocido",
    "Premio inesperado",
    "Errores de ortografía",
    "Marca con guion en el dominio",
    "Archivo APK adjunto",
    "Pide dinero a un colega",
];

/// Consequences of handing over a verification PIN, in reveal order
pub const PIN_CONSEQUENCES: [&str; 5] = [
    "El atacante registra tu cuenta de WhatsApp en su propio teléfono.",
    "Tu sesión se cierra en este dispositivo y pierdes el acceso.",
    "El atacante lee tus grupos y contactos institucionales.",
    "Envía mensajes pidiendo dinero o códigos haciéndose pasar por ti.",
    "Conclusión: no compartas códigos. Si te lo piden por mensaje, es fraude.",
];
