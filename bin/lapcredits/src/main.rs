//! Leaderboard credit rewards command line tool.

mod cli;
mod config;
mod logging;

use clap::Parser;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = cli::Cli::parse();
    logging::init_logging(&cli.log_args)?;

    cli::run(cli)
}
