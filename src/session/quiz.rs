//! Quiz and classify-message sessions

use std::io::{self, BufRead, Write};
use std::time::Duration;

use colored::Colorize;

use super::{Console, is_quit};
use crate::content::MessageKind;
use crate::core::services::{QuizItem, QuizSession, QuizState};
use crate::output::GameSummary;

/// An answer type that can be typed on a line
pub trait Answer: Copy + PartialEq {
    /// Accepted spellings, shown as a hint
    const HINT: &'static str;

    /// Parse a typed answer
    fn parse(line: &str) -> Option<Self>;
}

impl Answer for bool {
    const HINT: &'static str = "v = verdadero, f = falso";

    fn parse(line: &str) -> Option<Self> {
        match line.to_lowercase().as_str() {
            "v" | "verdadero" | "true" | "t" => Some(true),
            "f" | "falso" | "false" => Some(false),
            _ => None,
        }
    }
}

impl Answer for MessageKind {
    const HINT: &'static str = "s = seguro, p = phishing";

    fn parse(line: &str) -> Option<Self> {
        match line.to_lowercase().as_str() {
            "s" | "seguro" | "safe" => Some(Self::Safe),
            "p" | "phishing" => Some(Self::Phishing),
            _ => None,
        }
    }
}

/// Play `items` in order; returns the score reached, even if abandoned
pub fn run_quiz<A: Answer, R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    game: &'static str,
    items: &[QuizItem<A>],
    feedback_delay: Duration,
) -> io::Result<GameSummary> {
    let mut session = QuizSession::new(items, feedback_delay);
    console.say(format!("({}; q para salir)", A::HINT))?;

    while let QuizState::Asking { index, .. } = session.quiz().state() {
        let Some(item) = session.quiz().current() else {
            break;
        };
        let total = session.quiz().total();
        console.say(format!("\nPregunta {}/{total}: {}", index + 1, item.prompt))?;

        let Some(line) = console.ask("respuesta")? else {
            break;
        };
        if is_quit(&line) {
            break;
        }
        let Some(answer) = A::parse(&line) else {
            console.say(format!("Respuesta no reconocida ({})", A::HINT))?;
            continue;
        };

        let Ok(feedback) = session.answer(console.now(), answer) else {
            continue;
        };
        if feedback.correct {
            console.say("Correcto".green().bold())?;
        } else {
            console.say("Incorrecto".red().bold())?;
        }
        console.say(feedback.explanation)?;

        while let Some(due) = session.next_due() {
            console.wait_until(due);
            session.tick(console.now());
        }
    }

    let quiz = session.quiz();
    let summary = GameSummary {
        game,
        score: quiz.score(),
        total: quiz.total(),
        percent: quiz.percent(),
    };
    log::debug!("{game}: finished at {}/{}", summary.score, summary.total);
    Ok(summary)
}
