//! Parameterized tests for the link analyzer
//!
//! These tests use test-case to run the same check against many links.

use chatshield::core::models::{LinkVerdict, RiskLevel, Signal};
use chatshield::core::services::{LinkAnalyzer, SignalTables, TableError};
use test_case::test_case;

fn analyzer() -> LinkAnalyzer {
    LinkAnalyzer::new(&SignalTables::default()).unwrap()
}

// =============================================================================
// Risk Levels
// =============================================================================

#[test_case("http://192.168.1.5/login", RiskLevel::High ; "ipv4 literal")]
#[test_case("https://bit.ly/abc123", RiskLevel::Medium ; "shortener")]
#[test_case("https://universidad.edu.co/portal", RiskLevel::Low ; "institutional host")]
#[test_case("https://whatsapp-premio.com", RiskLevel::High ; "brand with hyphen")]
#[test_case("https://bank-seguro.co/login", RiskLevel::High ; "denylisted host")]
#[test_case("https://xn--bcher-kva.ch", RiskLevel::Medium ; "punycode label")]
#[test_case("www.google.com", RiskLevel::Low ; "no scheme")]
#[test_case("https://microsoft.co", RiskLevel::Low ; "shortener suffix without dot")]
#[test_case("https://xbit.ly/x", RiskLevel::Low ; "shortener inside a longer label")]
#[test_case("https://go.bit.ly/x", RiskLevel::Medium ; "shortener subdomain")]
fn risk_of_link(input: &str, expected: RiskLevel) {
    assert_eq!(analyzer().analyze(input).risk(), Some(expected), "input={input:?}");
}

// =============================================================================
// Signals
// =============================================================================

#[test_case(
    "https://whatsapp-help-secure.com",
    &[Signal::Denylisted, Signal::BrandImpersonation] ;
    "denylist and brand"
)]
#[test_case(
    "https://banco-x.xn--bcher-kva.ch",
    &[Signal::BrandImpersonation, Signal::Punycode] ;
    "brand and punycode"
)]
#[test_case("https://t.co/abc", &[Signal::Shortener] ; "short shortener")]
#[test_case("https://nequi.com.co", &[] ; "brand without hyphen")]
fn signals_of_link(input: &str, expected: &[Signal]) {
    let verdict = analyzer().analyze(input);
    assert_eq!(verdict.assessment().unwrap().signals, expected);
}

#[test]
fn host_is_lowercased() {
    let verdict = analyzer().analyze("HTTPS://BIT.LY/ABC");
    let a = verdict.assessment().unwrap();
    assert_eq!(a.host, "bit.ly");
    assert!(a.has(Signal::Shortener));
}

#[test_case("http:/bit.ly/x", "bit.ly" ; "single slash after scheme")]
#[test_case("HTTP:bit.ly/x", "bit.ly" ; "no slashes after scheme")]
#[test_case("whatsapp-help-secure.com:443/login", "whatsapp-help-secure.com" ; "host and port")]
#[test_case("bit.ly:8080", "bit.ly" ; "shortener with port")]
fn scheme_variants_keep_the_real_host(input: &str, host: &str) {
    let verdict = analyzer().analyze(input);
    let a = verdict.assessment().unwrap();
    assert_eq!(a.host, host);
    assert!(a.is_risky());
}

// =============================================================================
// Invalid Input
// =============================================================================

#[test_case("" ; "empty")]
#[test_case("   " ; "blank")]
#[test_case("http://" ; "scheme only")]
#[test_case("ht tp://bad host" ; "spaces")]
#[test_case("mailto:x@whatsapp-help.com" ; "mailto has no host")]
#[test_case("localhost:8080" ; "undotted scheme without host")]
fn invalid_input_is_not_classified(input: &str) {
    let verdict = analyzer().analyze(input);
    assert!(verdict.is_invalid());
    assert_eq!(verdict.risk(), None);
    assert!(matches!(verdict, LinkVerdict::Invalid { .. }));
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn extra_tables_extend_the_defaults() {
    let tables = SignalTables::default()
        .extend(&["acorta.me".to_string()], &["premios-udb.info".to_string()]);
    let analyzer = LinkAnalyzer::new(&tables).unwrap();

    assert_eq!(analyzer.analyze("https://acorta.me/x").risk(), Some(RiskLevel::Medium));
    assert_eq!(analyzer.analyze("premios-udb.info").risk(), Some(RiskLevel::High));
    assert_eq!(analyzer.analyze("https://bit.ly/x").risk(), Some(RiskLevel::Medium));
}

#[test_case("nodot" ; "no dot")]
#[test_case(".leading.dot" ; "leading dot")]
#[test_case("https://promo-nequi.click" ; "with scheme")]
#[test_case("promo nequi.click" ; "inner space")]
#[test_case("   " ; "blank")]
fn invalid_extra_hosts_are_skipped(host: &str) {
    let defaults = SignalTables::default();
    let tables = defaults.clone().extend(&[host.to_string()], &[host.to_string()]);

    assert_eq!(tables.shorteners, defaults.shorteners);
    assert_eq!(tables.denylist, defaults.denylist);
    assert!(LinkAnalyzer::new(&tables).is_ok());
}

#[test]
fn extra_hosts_are_normalized() {
    let tables = SignalTables::default().extend(&[" Acorta.ME ".to_string()], &[]);
    assert_eq!(tables.shorteners.last().map(String::as_str), Some("acorta.me"));
}

#[test_case("Bad.Host" ; "uppercase")]
#[test_case("nodot" ; "no dot")]
#[test_case(".leading.dot" ; "leading dot")]
fn invalid_table_entries_are_rejected(host: &str) {
    let mut tables = SignalTables::default();
    tables.shorteners.push(host.to_string());
    assert!(matches!(
        LinkAnalyzer::new(&tables),
        Err(TableError::InvalidHost { table: "shortener", .. })
    ));
}

#[test]
fn empty_table_entry_is_rejected() {
    let mut tables = SignalTables::default();
    tables.denylist.push(String::new());
    assert_eq!(LinkAnalyzer::new(&tables).unwrap_err(), TableError::Empty { table: "denylist" });
}
