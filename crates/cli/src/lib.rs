//! `panoptes` command: correlate one pull request with its linked issues and
//! print the merged timeline.

pub mod cli;
pub mod report;
pub mod sources;

use std::io::Write;

use anyhow::Context;

pub use cli::Cli;
pub use report::OutputFormat;

/// Run one correlation pass over the built-in sources and write the report.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let sources = sources::Sources::demo();
    tracing::debug!(
        primary = sources.primary.len(),
        secondary = sources.secondary.len(),
        "sources loaded"
    );

    let timeline = panoptes_correlation::correlate_with(
        &sources.primary,
        &cli.pull_request_id,
        &sources.secondary,
        cli.refs,
    )
    .with_context(|| format!("correlating pull request `{}`", cli.pull_request_id))?;

    report::render(&timeline, cli.output, out).context("writing report")?;
    Ok(())
}
