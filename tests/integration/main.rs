//! Integration tests for the chatshield CLI
//!
//! Every interactive command reads its input line by line from stdin, so whole
//! sessions can be scripted here and run with `--instant` to skip the delays.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_case::test_case;

/// Helper function to create a chatshield command isolated from the user's config
fn chatshield(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("chatshield"));
    cmd.arg("--config").arg(temp.path().join("config.toml"));
    cmd.current_dir(temp.path());
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("chatshield v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check-url"))
        .stdout(predicate::str::contains("present"));
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("chatshield present"));
}

// =============================================================================
// SECTIONS
// =============================================================================

#[test]
fn test_sections_human() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("glosario"))
        .stdout(predicate::str::contains("sección interactiva"));
}

#[test]
fn test_sections_json() {
    let temp = TempDir::new().unwrap();
    let output = chatshield(&temp).args(["--json", "sections"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 10);
    assert_eq!(sections[0]["id"], "portada");
    assert_eq!(sections[6]["interactive"], true);
}

#[test]
fn test_show_section_by_number() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .args(["show", "7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[7/10]"));
}

#[test]
fn test_show_unknown_section_fails() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown section: nope"));
}

// =============================================================================
// LINK CHECKS
// =============================================================================

#[test_case("http://192.168.1.5/login", "high", "ip_literal" ; "ip literal")]
#[test_case("https://bit.ly/abc123", "medium", "shortener" ; "shortener")]
#[test_case("https://whatsapp-help-secure.com", "high", "denylisted" ; "denylisted")]
fn test_check_url_json(url: &str, risk: &str, signal: &str) {
    let temp = TempDir::new().unwrap();
    let output = chatshield(&temp).args(["--json", "check-url", url]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["verdict"]["risk"], risk);
    assert_eq!(json["verdict"]["signals"][0], signal);
}

#[test]
fn test_check_url_clean_host() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .args(["check-url", "https://universidad.edu.co/portal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dominio: universidad.edu.co"))
        .stdout(predicate::str::contains("No se detectaron señales comunes de riesgo"))
        .stdout(predicate::str::contains("Regla de oro"));
}

#[test]
fn test_check_url_invalid_is_reported() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .args(["check-url", "http://"])
        .assert()
        .success()
        .stdout(predicate::str::contains("URL inválida"));
}

#[test]
fn test_check_url_uses_configured_denylist() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[links]\nextra_denylist = [\"promo-nequi.click\"]\n",
    )
    .unwrap();

    let output =
        chatshield(&temp).args(["--json", "check-url", "promo-nequi.click"]).output().unwrap();
    assert_eq!(stdout_json(&output)["verdict"]["risk"], "high");
}

#[test]
fn test_check_url_survives_bad_config_host() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[links]\nextra_denylist = [\"https://promo-nequi.click\", \"promo-nequi.click\"]\n",
    )
    .unwrap();

    let output =
        chatshield(&temp).args(["--json", "check-url", "promo-nequi.click"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["verdict"]["risk"], "high");
}

// =============================================================================
// GAMES & BOARDS
// =============================================================================

#[test]
fn test_quiz_perfect_score() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .args(["--instant", "quiz"])
        .write_stdin("f\nv\nf\nv\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pregunta 4/4"))
        .stdout(predicate::str::contains("Puntaje: 4/4 (100%)"));
}

#[test]
fn test_quiz_json_keeps_prompts_on_stderr() {
    let temp = TempDir::new().unwrap();
    let output = chatshield(&temp)
        .args(["--json", "--instant", "quiz"])
        .write_stdin("v\nv\nv\nv\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Pregunta 1/4"));

    let json = stdout_json(&output);
    assert_eq!(json["game"], "quiz");
    assert_eq!(json["score"], 2);
    assert_eq!(json["percent"], 50);
}

#[test]
fn test_classify_all_phishing() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .args(["--instant", "classify"])
        .write_stdin("p\np\np\np\np\np\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Puntaje: 4/6 (67%)"));
}

#[test]
fn test_abandoned_quiz_reports_partial_score() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .args(["--instant", "quiz"])
        .write_stdin("f\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Puntaje: 1/4 (25%)"));
}

#[test]
fn test_checklist_completes() {
    let temp = TempDir::new().unwrap();
    let output = chatshield(&temp)
        .args(["--json", "checklist"])
        .write_stdin("1\n2\n3\n4\n5\n6\n7\n8\n99\n")
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stderr).contains("Escribe un número entre 1 y 8"));

    let json = stdout_json(&output);
    assert_eq!(json["checked"], 8);
    assert_eq!(json["complete"], true);
    assert!(json.get("completed_lines").is_none());
}

#[test]
fn test_bingo_diagonal() {
    let temp = TempDir::new().unwrap();
    let output =
        chatshield(&temp).args(["--json", "bingo"]).write_stdin("1\n5\n9\n").output().unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["complete"], true);
    assert_eq!(json["completed_lines"], serde_json::json!([6]));
    assert_eq!(json["percent"], 33);
}

#[test]
fn test_pin_reveals_every_consequence() {
    let temp = TempDir::new().unwrap();
    let output = chatshield(&temp)
        .args(["--json", "--instant", "pin"])
        .write_stdin("123456\ncompartir\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["stage"]["stage"], "revealed");
    assert_eq!(json["stage"]["shown"], 5);
    assert_eq!(json["consequences"].as_array().unwrap().len(), 5);
}

// =============================================================================
// PRESENTER
// =============================================================================

#[test]
fn test_present_walk_and_play() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp)
        .args(["--instant", "present"])
        .write_stdin("n\ng simuladores\nplay link\nbit.ly/x\nq\ng quiz\nplay\nf\nv\nf\nv\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[2/10]"))
        .stdout(predicate::str::contains("Dominio: bit.ly"))
        .stdout(predicate::str::contains("Puntaje: 4/4 (100%)"));
}

// =============================================================================
// EXPORT
// =============================================================================

#[test]
fn test_export_writes_printable_page() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out").join("deck.html");

    chatshield(&temp)
        .args(["export", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("deck.html"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("@media print"));
    assert!(html.contains("id=\"glosario\""));
}

#[test]
fn test_export_default_path() {
    let temp = TempDir::new().unwrap();
    chatshield(&temp).arg("export").assert().success();
    assert!(temp.path().join("chatshield.html").exists());
}
