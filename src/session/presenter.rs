//! Terminal presenter
//!
//! Walks the deck section by section. The widget of a section only lives while
//! it is being played; leaving a section also collapses its risk examples.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use super::{Console, run_bingo, run_checklist, run_link_checker, run_pin, run_quiz};
use crate::config::Config;
use crate::content::{
    BINGO_CELLS, BINGO_SIDE, CLASSIFY_MESSAGES, PIN_CONSEQUENCES, PRACTICES, QUIZ, SECTIONS,
    WHATSAPP_RISKS,
};
use crate::core::models::SectionKind;
use crate::core::services::{Accordion, Deck, LinkAnalyzer};
use crate::output::Render;
use crate::render::text;

const HELP: &str = "Enter/n siguiente · p anterior · g <id|n> ir a · m menú · e <n> ejemplo · \
                    play [actividad] · print imprimir · q salir";

/// A command typed at the presenter prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCommand {
    /// Next section (also an empty line)
    Next,
    /// Previous section
    Prev,
    /// Jump to a section by id or number
    Goto(String),
    /// List the sections
    Menu,
    /// Toggle the example of a risk card (0-based)
    Example(usize),
    /// Start the activity of the current section, optionally naming it
    Play(Option<String>),
    /// Write the printable page and open it
    Print,
    /// Show the key help
    Help,
    /// Leave the presenter
    Quit,
    /// Anything else
    Unknown(String),
}

impl PresenterCommand {
    /// Parse a prompt line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, Some(arg.trim())),
            None => (line, None),
        };
        match (word.to_lowercase().as_str(), arg) {
            ("" | "n" | "next" | "siguiente", None) => Self::Next,
            ("p" | "prev" | "anterior", None) => Self::Prev,
            ("g" | "go" | "ir", Some(target)) => Self::Goto(target.to_string()),
            ("m" | "menu" | "menú", None) => Self::Menu,
            ("e" | "ejemplo", Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Self::Example(n - 1),
                _ => Self::Unknown(line.to_string()),
            },
            ("play" | "jugar", arg) => Self::Play(arg.map(str::to_lowercase)),
            ("print" | "imprimir", None) => Self::Print,
            ("h" | "?" | "ayuda" | "help", None) => Self::Help,
            ("q" | "quit" | "salir", None) => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Interactive walk through the deck
#[derive(Debug)]
pub struct Presenter<'a> {
    deck: Deck,
    accordion: Accordion,
    config: &'a Config,
    analyzer: &'a LinkAnalyzer,
}

impl<'a> Presenter<'a> {
    /// Start at the cover
    #[must_use]
    pub fn new(config: &'a Config, analyzer: &'a LinkAnalyzer) -> Self {
        Self {
            deck: Deck::new(&SECTIONS),
            accordion: Accordion::default(),
            config,
            analyzer,
        }
    }

    /// Navigation state
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Run until the user quits or input ends
    ///
    /// `print` writes the printable page and returns a line to show.
    pub fn run<R, W, F>(&mut self, console: &mut Console<'_, R, W>, mut print: F) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        F: FnMut() -> io::Result<String>,
    {
        console.say(HELP.dimmed())?;
        self.show(console)?;

        while let Some(line) = console.ask("presentación")? {
            match PresenterCommand::parse(&line) {
                PresenterCommand::Next => self.navigate(console, Deck::next_section)?,
                PresenterCommand::Prev => self.navigate(console, Deck::prev_section)?,
                PresenterCommand::Goto(target) => match self.deck.jump(&target) {
                    Ok(_) => {
                        self.accordion.close();
                        self.show(console)?;
                    },
                    Err(e) => console.say(e.to_string().red())?,
                },
                PresenterCommand::Menu => {
                    for (i, s) in self.deck.sections().iter().enumerate() {
                        let here = if i == self.deck.position() { ">" } else { " " };
                        console.say(format!("{here} {:>2}. {} ({})", i + 1, s.title, s.id))?;
                    }
                },
                PresenterCommand::Example(n) => self.example(console, n)?,
                PresenterCommand::Play(activity) => self.play(console, activity.as_deref())?,
                PresenterCommand::Print => match print() {
                    Ok(message) => console.say(message)?,
                    Err(e) => console.say(format!("No se pudo imprimir: {e}").red())?,
                },
                PresenterCommand::Help => console.say(HELP)?,
                PresenterCommand::Quit => break,
                PresenterCommand::Unknown(input) => {
                    console.say(format!("Comando desconocido: {input}"))?;
                    console.say(HELP.dimmed())?;
                },
            }
        }
        log::debug!("presenter: left at section {}", self.deck.position() + 1);
        Ok(())
    }

    fn navigate<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<'_, R, W>,
        step: impl FnOnce(&mut Deck) -> bool,
    ) -> io::Result<()> {
        if step(&mut self.deck) {
            self.accordion.close();
            self.show(console)
        } else {
            console.say("(no hay más secciones en esa dirección)")
        }
    }

    fn show<R: BufRead, W: Write>(&self, console: &mut Console<'_, R, W>) -> io::Result<()> {
        let Some(section) = self.deck.current() else {
            return Ok(());
        };
        let total = self.deck.sections().len();
        let progress = usize::from(self.deck.progress());
        let bar = format!("{}{}", "█".repeat(progress / 5), "░".repeat(20 - progress / 5));

        console.say("")?;
        console.say(format!(
            "{}  {bar} {progress}%",
            text::heading(section, self.deck.position() + 1, total).bold()
        ))?;
        console.say(text::section_body(section, self.accordion.open()))
    }

    fn example<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<'_, R, W>,
        index: usize,
    ) -> io::Result<()> {
        let on_risks = self.deck.current().is_some_and(|s| s.kind == SectionKind::WhatsappRisks);
        if !on_risks {
            return console.say("Los ejemplos están en la sección de riesgos en WhatsApp.");
        }
        if index >= WHATSAPP_RISKS.len() {
            return console.say(format!("Elige un riesgo entre 1 y {}", WHATSAPP_RISKS.len()));
        }
        self.accordion.toggle(index);
        self.show(console)
    }

    fn play<R: BufRead, W: Write>(
        &self,
        console: &mut Console<'_, R, W>,
        activity: Option<&str>,
    ) -> io::Result<()> {
        let Some(section) = self.deck.current() else {
            return Ok(());
        };
        let config = self.config;
        match (section.kind, activity) {
            (SectionKind::Quiz, None | Some("quiz")) => {
                let summary = run_quiz(console, "quiz", &QUIZ, config.feedback_delay())?;
                console.say(summary.human())?;
            },
            (SectionKind::Quiz, Some("classify" | "clasificar")) => {
                let summary =
                    run_quiz(console, "classify", &CLASSIFY_MESSAGES, config.feedback_delay())?;
                console.say(summary.human())?;
            },
            (SectionKind::Simulators, None | Some("pin")) => {
                let summary = run_pin(console, &PIN_CONSEQUENCES, config.pin_timings())?;
                console.say(summary.human())?;
            },
            (SectionKind::Simulators, Some("link" | "enlace")) => {
                run_link_checker(console, self.analyzer)?;
            },
            (SectionKind::Practices, None | Some("checklist")) => {
                let summary = run_checklist(console, &PRACTICES)?;
                console.say(summary.human())?;
            },
            (SectionKind::Practices, Some("bingo")) => {
                let summary = run_bingo(console, &BINGO_CELLS, BINGO_SIDE)?;
                console.say(summary.human())?;
            },
            (SectionKind::WhatsappRisks, _) => {
                console.say("Usa e <n> para ver el ejemplo de un riesgo.")?;
            },
            (kind, Some(other)) if kind.is_interactive() => {
                console.say(format!("Actividad desconocida: {other}"))?;
            },
            _ => console.say("Esta sección no tiene actividad.")?,
        }
        Ok(())
    }
}
