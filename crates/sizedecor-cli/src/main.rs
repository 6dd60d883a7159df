//! # sizefmt — sizedecor CLI
//!
//! Renders byte counts as `1.5Kb`-style strings from the command line.

mod commands;
mod directive;
mod output;

use clap::Parser;
use sizedecor_common::config::SizeDecorConfig;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = SizeDecorConfig::load_or_default(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::execute(cli, &config)
}
