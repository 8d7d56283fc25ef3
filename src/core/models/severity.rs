//! Link risk levels
//!
//! Defines how alarming a link verdict should look.

use serde::{Deserialize, Serialize};

/// Aggregate risk of a link
///
/// Ordered from least to most severe, so the verdict of a link is simply the
/// maximum over its fired signals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No red flag fired
    #[default]
    Low,
    /// Only hiding techniques fired (shorteners, punycode)
    Medium,
    /// A direct deception signal fired
    High,
}

impl RiskLevel {
    /// Spanish label shown to the audience
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Sin señales comunes de riesgo",
            Self::Medium => "Riesgo medio",
            Self::High => "Riesgo alto",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "none" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Invalid risk level: {s}. Use: low, medium, high")),
        }
    }
}
