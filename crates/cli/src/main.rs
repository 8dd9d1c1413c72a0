use clap::Parser;

use panoptes_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    panoptes_observability::init(&cli.logging())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    panoptes_cli::run(&cli, &mut out).inspect_err(|err| {
        tracing::error!("correlation failed: {err:#}");
    })
}
