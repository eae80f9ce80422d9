use anyhow::Context;
use clap::Parser;
use cli::Cli;
use utilkit::die_on_error;

mod cli;
mod commands;
mod config;
mod logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Without configuration or logging there is nothing useful left to do.
    let app_config = die_on_error!(
        config::load_config(cli.config.as_deref()),
        "Failed to load configuration"
    );
    die_on_error!(
        logger::setup_logger(&app_config, cli.log_level.as_deref()),
        "Failed to initialize logger"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &app_config, &mut out)
        .with_context(|| format!("{:?} failed", cli.command))?;

    Ok(())
}
