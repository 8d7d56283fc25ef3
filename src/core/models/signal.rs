//! Hostname red flags
//!
//! The signal table is a teaching aid: the lists behind each signal are short,
//! hand-picked examples and not a threat-intelligence feed.

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// A red flag that can fire on a hostname
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Host is listed in the fixed denylist
    Denylisted,
    /// Host looks like a trusted brand followed by a hyphen
    BrandImpersonation,
    /// Host is a dotted-quad IPv4 address
    IpLiteral,
    /// Host belongs to a link shortener
    Shortener,
    /// Host carries an `xn--` label
    Punycode,
}

/// One row of the signal table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalRule {
    /// The signal this row describes
    pub signal: Signal,
    /// Severity contributed when the signal fires
    pub severity: RiskLevel,
    /// Spanish label shown to the audience
    pub label: &'static str,
}

/// Signal table in display order
pub const SIGNAL_RULES: [SignalRule; 5] = [
    SignalRule {
        signal: Signal::Denylisted,
        severity: RiskLevel::High,
        label: "En lista de dominios riesgosos",
    },
    SignalRule {
        signal: Signal::BrandImpersonation,
        severity: RiskLevel::High,
        label: "Imita marcas con guiones",
    },
    SignalRule {
        signal: Signal::IpLiteral,
        severity: RiskLevel::High,
        label: "Usa dirección IP en lugar de nombre",
    },
    SignalRule {
        signal: Signal::Shortener,
        severity: RiskLevel::Medium,
        label: "Usa acortador de enlaces (oculta destino real)",
    },
    SignalRule {
        signal: Signal::Punycode,
        severity: RiskLevel::Medium,
        label: "Dominio con caracteres raros (punycode)",
    },
];

impl Signal {
    /// Table row for this signal
    #[must_use]
    pub const fn rule(self) -> SignalRule {
        match self {
            Self::Denylisted => SIGNAL_RULES[0],
            Self::BrandImpersonation => SIGNAL_RULES[1],
            Self::IpLiteral => SIGNAL_RULES[2],
            Self::Shortener => SIGNAL_RULES[3],
            Self::Punycode => SIGNAL_RULES[4],
        }
    }

    /// Severity contributed by this signal
    #[must_use]
    pub const fn severity(self) -> RiskLevel {
        self.rule().severity
    }

    /// Spanish label shown to the audience
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.rule().label
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Denylisted => write!(f, "denylisted"),
            Self::BrandImpersonation => write!(f, "brand_impersonation"),
            Self::IpLiteral => write!(f, "ip_literal"),
            Self::Shortener => write!(f, "shortener"),
            Self::Punycode => write!(f, "punycode"),
        }
    }
}
