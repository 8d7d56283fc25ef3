//! Stand-alone games and boards

use chatshield::content::{
    BINGO_CELLS, BINGO_SIDE, CLASSIFY_MESSAGES, PIN_CONSEQUENCES, PRACTICES, QUIZ,
};
use chatshield::core::services::QuizItem;
use chatshield::output::Render;
use chatshield::session::{self, Answer};

use super::AppContext;

/// Play the true/false quiz
pub fn quiz(ctx: &AppContext) -> anyhow::Result<()> {
    play_quiz(ctx, "quiz", &QUIZ)
}

/// Play "safe or phishing?"
pub fn classify(ctx: &AppContext) -> anyhow::Result<()> {
    play_quiz(ctx, "classify", &CLASSIFY_MESSAGES)
}

fn play_quiz<A: Answer>(
    ctx: &AppContext,
    game: &'static str,
    items: &[QuizItem<A>],
) -> anyhow::Result<()> {
    let clock = ctx.clock();
    let mut console = ctx.console(clock.as_ref());
    session::run_quiz(&mut console, game, items, ctx.config().feedback_delay())?
        .render(ctx.mode());
    Ok(())
}

/// Go through the good-practices checklist
pub fn checklist(ctx: &AppContext) -> anyhow::Result<()> {
    let clock = ctx.clock();
    let mut console = ctx.console(clock.as_ref());
    session::run_checklist(&mut console, &PRACTICES)?.render(ctx.mode());
    Ok(())
}

/// Play red-flag bingo
pub fn bingo(ctx: &AppContext) -> anyhow::Result<()> {
    let clock = ctx.clock();
    let mut console = ctx.console(clock.as_ref());
    session::run_bingo(&mut console, &BINGO_CELLS, BINGO_SIDE)?.render(ctx.mode());
    Ok(())
}

/// Run the PIN-sharing simulator
pub fn pin(ctx: &AppContext) -> anyhow::Result<()> {
    let clock = ctx.clock();
    let mut console = ctx.console(clock.as_ref());
    session::run_pin(&mut console, &PIN_CONSEQUENCES, ctx.config().pin_timings())?
        .render(ctx.mode());
    Ok(())
}
