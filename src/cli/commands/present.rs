//! Interactive presentation

use std::io;

use chatshield::session::Presenter;

use super::AppContext;
use super::export::print_page;

/// Walk the deck in the terminal
pub fn present(ctx: &AppContext) -> anyhow::Result<()> {
    let analyzer = ctx.analyzer()?;
    let clock = ctx.clock();
    let mut console = ctx.console(clock.as_ref());

    let mut presenter = Presenter::new(ctx.config(), &analyzer);
    presenter.run(&mut console, || {
        print_page().map_err(|e| io::Error::other(format!("{e:#}")))
    })?;
    Ok(())
}
