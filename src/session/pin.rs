//! PIN simulator session

use std::io::{self, BufRead, Write};

use colored::Colorize;

use super::{Console, is_quit};
use crate::core::services::{PIN_LENGTH, PinSimulator, PinTimings};
use crate::output::PinSummary;

fn is_share(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "compartir" | "share" | "enviar")
}

fn is_reset(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "reset" | "reiniciar")
}

/// Run the PIN-sharing dramatization until the user quits
pub fn run_pin<R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    consequences: &'static [&'static str],
    timings: PinTimings,
) -> io::Result<PinSummary> {
    let mut sim = PinSimulator::new(consequences, timings);
    console.say(format!(
        "Un supuesto \"soporte\" te pide el código de {PIN_LENGTH} dígitos que llegó por SMS."
    ))?;
    console.say("(escribe el PIN, luego \"compartir\"; \"reset\" reinicia, q para salir)")?;
    console.say("(una vez enviado, la secuencia se muestra completa antes de aceptar \"reset\")")?;

    while let Some(line) = console.ask("pin")? {
        if is_quit(&line) {
            break;
        }
        if is_reset(&line) {
            sim.reset();
            console.say("Simulador reiniciado.")?;
            continue;
        }
        if is_share(&line) {
            if let Err(e) = sim.share(console.now()) {
                console.say(format!("No se puede compartir: {e}"))?;
                continue;
            }
            // Input is not read while the reveals are paced.
            console.say("Enviando PIN... (no se puede interrumpir)".yellow())?;
            let mut shown = 0;
            while let Some(due) = sim.next_due() {
                console.wait_until(due);
                for consequence in sim.tick(console.now()) {
                    shown += 1;
                    console.say(format!("  {shown}. {consequence}").red())?;
                }
            }
            console.say("(\"reset\" para intentarlo de nuevo)")?;
            continue;
        }

        let pin = sim.enter(&line).to_string();
        console.say(format!("PIN: {pin} ({}/{PIN_LENGTH})", pin.len()))?;
        if sim.can_share() {
            console.say("Escribe \"compartir\" para enviarlo.")?;
        }
    }

    Ok(PinSummary {
        stage: sim.stage(),
        consequences: sim.visible().to_vec(),
    })
}
