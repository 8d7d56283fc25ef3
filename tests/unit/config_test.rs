//! Tests for configuration management

use std::fs;
use std::time::Duration;

use chatshield::config::Config;
use chatshield::core::models::RiskLevel;
use chatshield::core::services::LinkAnalyzer;
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.feedback_delay(), Duration::from_millis(2500));
    assert_eq!(config.pin_timings().sending, Duration::from_millis(1500));
    assert_eq!(config.pin_timings().reveal_interval, Duration::from_millis(800));
    assert!(config.display.color);
    assert!(config.links.extra_denylist.is_empty());
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml"));
    assert_eq!(config, Config::default());
}

// =============================================================================
// FILE FORMAT
// =============================================================================

#[test]
fn test_config_written_file_loads_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let mut config = Config::default();
    config.timing.feedback_ms = 100;
    config.display.color = false;
    config.links.extra_shorteners.push("s.id".to_string());
    fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_config_partial_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[timing]\nreveal_ms = 10\n").unwrap();

    let config = Config::load_from(&path);
    assert_eq!(config.timing.reveal_ms, 10);
    assert_eq!(config.timing.feedback_ms, 2500);
    assert!(config.display.color);
}

#[test]
fn test_config_invalid_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "this is = = not toml").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}

// =============================================================================
// DERIVED SETTINGS
// =============================================================================

#[test]
fn test_config_extra_hosts_reach_the_analyzer() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[links]\nextra_denylist = [\"promo-nequi.click\"]\n").unwrap();

    let config = Config::load_from(&path);
    let analyzer = LinkAnalyzer::new(&config.signal_tables()).unwrap();
    assert_eq!(analyzer.analyze("promo-nequi.click/x").risk(), Some(RiskLevel::High));
}

#[test]
fn test_config_bad_extra_host_is_skipped() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[links]\nextra_denylist = [\"https://promo-nequi.click\", \"premio nequi.click\", \
         \"promo-nequi.click\"]\nextra_shorteners = [\"acortador\"]\n",
    )
    .unwrap();

    let config = Config::load_from(&path);
    let analyzer = LinkAnalyzer::new(&config.signal_tables()).unwrap();
    assert_eq!(analyzer.analyze("promo-nequi.click").risk(), Some(RiskLevel::High));
    assert_eq!(analyzer.analyze("https://bit.ly/x").risk(), Some(RiskLevel::Medium));
}

#[test]
fn test_config_instant_keeps_other_settings() {
    let mut config = Config::default();
    config.display.color = false;
    let config = config.instant();
    assert_eq!(config.feedback_delay(), Duration::ZERO);
    assert_eq!(config.pin_timings().sending, Duration::ZERO);
    assert!(!config.display.color);
}
