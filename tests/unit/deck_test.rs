//! Tests for deck navigation and section rendering

use chatshield::content::{SECTIONS, WHATSAPP_RISKS};
use chatshield::core::models::SectionKind;
use chatshield::core::services::{Accordion, Deck, DeckError};
use chatshield::render::text;
use test_case::test_case;

#[test_case("portada", 0 ; "cover by id")]
#[test_case("#quiz", 6 ; "anchor form")]
#[test_case("10", 9 ; "last by number")]
#[test_case("Prácticas", 8 ; "by label")]
#[test_case("  SMS ", 3 ; "label with spaces and case")]
fn jump_targets(key: &str, position: usize) {
    let mut deck = Deck::new(&SECTIONS);
    deck.jump(key).unwrap();
    assert_eq!(deck.position(), position);
}

#[test_case("11" ; "past the end")]
#[test_case("0" ; "zero")]
#[test_case("" ; "empty")]
#[test_case("phishing" ; "unknown id")]
fn bad_jump_targets_keep_position(key: &str) {
    let mut deck = Deck::new(&SECTIONS);
    deck.jump("quiz").unwrap();
    assert_eq!(deck.jump(key), Err(DeckError::UnknownSection(key.to_string())));
    assert_eq!(deck.position(), 6);
}

#[test]
fn walking_the_deck_end_to_end() {
    let mut deck = Deck::new(&SECTIONS);
    assert_eq!(deck.progress(), 0);
    assert!(!deck.prev_section());

    let mut steps = 0;
    while deck.next_section() {
        steps += 1;
    }
    assert_eq!(steps, SECTIONS.len() - 1);
    assert_eq!(deck.progress(), 100);
    assert_eq!(deck.current().unwrap().kind, SectionKind::Glossary);
}

#[test]
fn section_ids_are_unique() {
    for (i, a) in SECTIONS.iter().enumerate() {
        assert!(SECTIONS[i + 1..].iter().all(|b| b.id != a.id), "duplicate id {}", a.id);
    }
}

#[test]
fn accordion_keeps_at_most_one_open() {
    let mut accordion = Accordion::default();
    accordion.toggle(0);
    accordion.toggle(2);
    assert_eq!(accordion.open(), Some(2));
    accordion.toggle(2);
    assert_eq!(accordion.open(), None);
}

#[test]
fn risk_examples_render_only_when_open() {
    let risks = SECTIONS.iter().find(|s| s.kind == SectionKind::WhatsappRisks).unwrap();
    let closed = text::section_body(risks, None);
    let open = text::section_body(risks, Some(1));

    assert!(!closed.contains(WHATSAPP_RISKS[1].example));
    assert!(open.contains(WHATSAPP_RISKS[1].example));
    assert!(!open.contains(WHATSAPP_RISKS[0].example));
}

#[test]
fn every_section_has_a_body() {
    for (i, section) in SECTIONS.iter().enumerate() {
        assert!(!text::section_body(section, None).trim().is_empty(), "{}", section.id);
        assert!(text::heading(section, i + 1, SECTIONS.len()).contains(section.title));
    }
}
