use anyhow::Context;
use clap::Parser;

use responsive_root::cli::Cli;
use responsive_root::logging::init_tracing;
use responsive_root::shutdown::ShutdownHandle;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    init_tracing(&config.logging.level, &config.logging.file_path())?;
    tracing::info!(?config, "starting");

    let shutdown = ShutdownHandle::new();
    shutdown
        .register_signals()
        .context("Failed to register signal handlers")?;

    responsive_root::ui::run(&config, shutdown)?;
    tracing::info!("exited cleanly");
    Ok(())
}
