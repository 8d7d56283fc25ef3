//! Link checker session

use std::io::{self, BufRead, Write};

use super::{Console, is_quit};
use crate::core::services::LinkAnalyzer;
use crate::output::{LinkCheckResult, Render};

/// Check links typed one per line until the user quits; returns how many were checked
pub fn run_link_checker<R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    analyzer: &LinkAnalyzer,
) -> io::Result<usize> {
    console.say("Pega un enlace para analizarlo (q para salir)")?;
    let mut checked = 0;
    while let Some(line) = console.ask("enlace")? {
        if is_quit(&line) {
            break;
        }
        if line.is_empty() {
            continue;
        }
        let result = LinkCheckResult::from(analyzer.analyze(&line));
        console.say(result.human())?;
        checked += 1;
    }
    Ok(checked)
}
