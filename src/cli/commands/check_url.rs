//! Link check command

use chatshield::output::{LinkCheckResult, Render};

use super::AppContext;

/// Check one link and print the verdict
///
/// A link that cannot be parsed is reported, not treated as a failure.
pub fn check_url(ctx: &AppContext, url: &str) -> anyhow::Result<()> {
    let analyzer = ctx.analyzer()?;
    let result = LinkCheckResult::from(analyzer.analyze(url));
    log::debug!("check-url: {url:?} -> {} signal(s)", result.reasons.len());
    result.render(ctx.mode());
    Ok(())
}
