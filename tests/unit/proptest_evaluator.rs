//! Property-based tests for the link analyzer
//!
//! Uses proptest to verify properties that should hold for all inputs.

use chatshield::core::models::{RiskLevel, Signal};
use chatshield::core::services::{DENYLIST, LinkAnalyzer, SHORTENERS, SignalTables};
use proptest::prelude::*;

fn analyzer() -> LinkAnalyzer {
    LinkAnalyzer::new(&SignalTables::default()).unwrap()
}

proptest! {
    /// Any dotted quad is an IP literal and therefore high risk
    #[test]
    fn dotted_quad_is_high(a in 0u8..=255, b in 0u8..=255, c in 0u8..=255, d in 0u8..=255) {
        let verdict = analyzer().analyze(&format!("http://{a}.{b}.{c}.{d}/login"));
        let assessment = verdict.assessment().unwrap();
        prop_assert!(assessment.has(Signal::IpLiteral));
        prop_assert_eq!(assessment.risk, RiskLevel::High);
    }

    /// Every denylisted host is high risk whatever path follows
    #[test]
    fn denylisted_host_is_high(index in 0..DENYLIST.len(), path in "[a-z0-9/]{0,20}") {
        let verdict = analyzer().analyze(&format!("{}/{path}", DENYLIST[index]));
        prop_assert_eq!(verdict.risk(), Some(RiskLevel::High));
    }

    /// Subdomains of a shortener are still shorteners
    #[test]
    fn shortener_subdomain_is_flagged(index in 0..SHORTENERS.len(), sub in "[a-z]{1,8}") {
        let verdict = analyzer().analyze(&format!("https://{sub}.{}/x", SHORTENERS[index]));
        prop_assert!(verdict.assessment().unwrap().has(Signal::Shortener));
    }

    /// Plain lowercase names under .edu.co never fire a signal
    #[test]
    fn plain_institutional_host_is_low(name in "[a-z]{3,12}") {
        let verdict = analyzer().analyze(&format!("https://{name}.edu.co"));
        prop_assert_eq!(verdict.risk(), Some(RiskLevel::Low));
    }

    /// The analyzer never panics, and a verdict always echoes the raw input
    #[test]
    fn any_input_gets_a_verdict(input in "\\PC{0,40}") {
        let verdict = analyzer().analyze(&input);
        match verdict.assessment() {
            Some(a) => prop_assert_eq!(&a.input, &input),
            None => prop_assert!(verdict.is_invalid()),
        }
    }
}
