//! Section listing and single-section output

use chatshield::content::SECTIONS;
use chatshield::core::services::Deck;
use chatshield::output::{OutputMode, Render, SectionInfo, SectionList};
use chatshield::render::text;

use super::AppContext;

/// List every section of the deck
pub fn sections(ctx: &AppContext) {
    SectionList::new(&SECTIONS).render(ctx.mode());
}

/// Print one section, looked up by id, label or 1-based number
pub fn show(ctx: &AppContext, key: &str) -> anyhow::Result<()> {
    let mut deck = Deck::new(&SECTIONS);
    let section = deck.jump(key)?;
    let number = deck.position() + 1;

    match ctx.mode() {
        OutputMode::Human => {
            println!("{}", text::heading(section, number, deck.sections().len()));
            println!();
            println!("{}", text::section_body(section, None));
        },
        OutputMode::Json => {
            let json = serde_json::json!({
                "section": SectionInfo::new(number, section),
                "body": text::section_body(section, None),
                "progress": deck.progress(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        },
    }
    Ok(())
}
