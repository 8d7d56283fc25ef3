//! Checklist and bingo sessions
//!
//! Both read item numbers (1-based) and toggle them until the user quits.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use super::{Console, is_quit};
use crate::core::services::{Bingo, Checklist, WidgetError};
use crate::output::BoardSummary;

const fn mark(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn parse_item(line: &str) -> Option<usize> {
    line.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
}

fn show_checklist<R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    items: &[&str],
    list: &Checklist,
) -> io::Result<()> {
    for (i, item) in items.iter().enumerate() {
        console.say(format!("  {} {}. {item}", mark(list.is_checked(i)), i + 1))?;
    }
    console.say(format!("Progreso: {}%", list.percent()))
}

/// Toggle practices until the user quits
pub fn run_checklist<R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    items: &[&str],
) -> io::Result<BoardSummary> {
    let mut list = Checklist::new(items.len());
    console.say("(número = marcar/desmarcar, q para salir)")?;
    show_checklist(console, items, &list)?;

    while let Some(line) = console.ask("item")? {
        if is_quit(&line) {
            break;
        }
        let toggled = parse_item(&line)
            .ok_or(WidgetError::OutOfRange { index: 0, len: items.len() })
            .and_then(|index| list.toggle(index));
        match toggled {
            Ok(_) => {
                show_checklist(console, items, &list)?;
                if list.is_complete() {
                    console.say("¡Todas las prácticas cubiertas!".green().bold())?;
                }
            },
            Err(_) => console.say(format!("Escribe un número entre 1 y {}", items.len()))?,
        }
    }

    Ok(BoardSummary {
        board: "checklist",
        checked: list.checked(),
        total: list.len(),
        percent: list.percent(),
        complete: list.is_complete(),
        completed_lines: Vec::new(),
    })
}

fn show_bingo<R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    cells: &[&str],
    side: usize,
    bingo: &Bingo,
) -> io::Result<()> {
    for (r, row) in cells.chunks(side.max(1)).enumerate() {
        let line = row
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                let i = r * side + c;
                format!("{} {}. {cell}", mark(bingo.board().is_checked(i)), i + 1)
            })
            .collect::<Vec<_>>()
            .join(" | ");
        console.say(format!("  {line}"))?;
    }
    Ok(())
}

/// Mark red flags on a square bingo card until the user quits
pub fn run_bingo<R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    cells: &[&str],
    side: usize,
) -> io::Result<BoardSummary> {
    let mut bingo = Bingo::square(side)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    console.say("(número = marcar alerta vista, q para salir)")?;
    show_bingo(console, cells, side, &bingo)?;

    while let Some(line) = console.ask("casilla")? {
        if is_quit(&line) {
            break;
        }
        let was_complete = bingo.is_complete();
        let toggled = parse_item(&line)
            .ok_or(WidgetError::OutOfRange { index: 0, len: cells.len() })
            .and_then(|index| bingo.toggle(index));
        if toggled.is_err() {
            console.say(format!("Escribe un número entre 1 y {}", cells.len()))?;
            continue;
        }
        show_bingo(console, cells, side, &bingo)?;
        if bingo.is_complete() && !was_complete {
            console.say("¡Bingo! Reconoces las señales de alerta.".green().bold())?;
        }
    }

    let board = bingo.board();
    Ok(BoardSummary {
        board: "bingo",
        checked: board.checked(),
        total: board.len(),
        percent: board.percent(),
        complete: bingo.is_complete(),
        completed_lines: bingo.completed_lines(),
    })
}
