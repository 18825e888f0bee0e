//! fmtreg - Entry Point
//!
//! Inspects the provider registries built from the compiled-in providers.

use std::io;

use clap::Parser;
use fmtreg::cli::{Cli, load_config, run};
use fmtreg::infrastructure::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(config.logging.clone())?;

    let stdout = io::stdout();
    run(&cli.command, &config, &mut stdout.lock())
}
