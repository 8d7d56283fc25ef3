//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use chatshield::content::{GOLDEN_RULE, HEURISTIC_NOTE, SECTIONS};
use chatshield::core::services::{LinkAnalyzer, PinStage, SignalTables};
use chatshield::output::{
    BoardSummary, GameSummary, LinkCheckResult, OperationResult, OutputMode, PinSummary, Render,
    SectionList,
};

fn check(url: &str) -> LinkCheckResult {
    let analyzer = LinkAnalyzer::new(&SignalTables::default()).unwrap();
    LinkCheckResult::from(analyzer.analyze(url))
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// LinkCheckResult Tests
// =============================================================================

#[test]
fn link_check_json_shape() {
    let result = check("https://bit.ly/abc");
    let json: serde_json::Value = serde_json::from_str(&result.json()).unwrap();
    assert_eq!(json["verdict"]["status"], "assessed");
    assert_eq!(json["verdict"]["host"], "bit.ly");
    assert_eq!(json["verdict"]["risk"], "medium");
    assert_eq!(json["verdict"]["signals"][0], "shortener");
    assert_eq!(json["note"], HEURISTIC_NOTE);
}

#[test]
fn invalid_link_json_shape() {
    let json: serde_json::Value = serde_json::from_str(&check("http://").json()).unwrap();
    assert_eq!(json["verdict"]["status"], "invalid");
    assert_eq!(json["verdict"]["input"], "http://");
    assert_eq!(json["reasons"], serde_json::json!([]));
}

#[test]
fn link_check_human_lists_reasons_and_rule() {
    colored::control::set_override(false);
    let text = check("http://192.168.1.5").human();
    assert!(text.contains("Dominio: 192.168.1.5"));
    assert!(text.contains("Riesgo alto"));
    assert!(text.contains("Usa dirección IP en lugar de nombre"));
    assert!(text.contains(GOLDEN_RULE));

    let clean = check("https://universidad.edu.co").human();
    assert!(clean.contains("No se detectaron señales comunes de riesgo"));
}

// =============================================================================
// Summary Tests
// =============================================================================

#[test]
fn section_list_marks_interactive_sections() {
    colored::control::set_override(false);
    let list = SectionList::new(&SECTIONS);
    assert_eq!(list.sections.len(), SECTIONS.len());
    let text = list.human();
    assert!(text.contains("quiz"));
    assert!(text.contains("* sección interactiva"));
}

#[test]
fn game_summary_serialization() {
    let summary = GameSummary {
        game: "quiz",
        score: 3,
        total: 4,
        percent: 75,
    };
    let json = serde_json::to_string(&summary).unwrap();
    assert_eq!(json, r#"{"game":"quiz","score":3,"total":4,"percent":75}"#);
}

#[test]
fn summaries_are_plain_values() {
    let summary = GameSummary {
        game: "classify",
        score: 4,
        total: 6,
        percent: 67,
    };
    let kept = summary;
    assert_eq!(summary.percent, kept.percent);

    let first = SectionList::new(&SECTIONS).sections[0];
    let again = first;
    assert_eq!(first.id, again.id);
    assert_eq!(first.number, 1);
}

#[test]
fn checklist_summary_skips_lines() {
    let summary = BoardSummary {
        board: "checklist",
        checked: 6,
        total: 6,
        percent: 100,
        complete: true,
        completed_lines: Vec::new(),
    };
    let json = serde_json::to_string(&summary).unwrap();
    assert!(!json.contains("completed_lines"));

    colored::control::set_override(false);
    assert!(summary.human().contains("¡Completo!"));
}

#[test]
fn bingo_summary_shows_lines() {
    colored::control::set_override(false);
    let summary = BoardSummary {
        board: "bingo",
        checked: 3,
        total: 9,
        percent: 33,
        complete: true,
        completed_lines: vec![0],
    };
    assert!(summary.json().contains("\"completed_lines\""));
    assert!(summary.human().contains("¡Bingo!"));
}

#[test]
fn pin_summary_lists_consequences() {
    let summary = PinSummary {
        stage: PinStage::Revealed { shown: 2 },
        consequences: vec!["uno", "dos"],
    };
    let json: serde_json::Value = serde_json::from_str(&summary.json()).unwrap();
    assert_eq!(json["stage"]["stage"], "revealed");
    assert_eq!(json["stage"]["shown"], 2);
    assert!(summary.human().contains("  2. dos"));

    let idle = PinSummary {
        stage: PinStage::Input,
        consequences: Vec::new(),
    };
    assert_eq!(idle.human(), "No compartiste ningún PIN.");
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Página guardada".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert_eq!(result.human(), "Página guardada");
}
