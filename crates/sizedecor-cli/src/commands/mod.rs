//! CLI command definitions and dispatch.

pub mod format;
pub mod scale;
pub mod units;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sizedecor_common::config::SizeDecorConfig;
use sizedecor_core::SizeDecor;

/// sizefmt — Render byte counts with binary-magnitude suffixes.
#[derive(Parser, Debug)]
#[command(name = sizedecor_common::constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a JSON configuration file.
    #[arg(long, global = true, env = "SIZEFMT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one or more sizes.
    Format(format::FormatArgs),
    /// Show how a magnitude is scaled to its unit.
    Scale(scale::ScaleArgs),
    /// List the unit suffix for every power of 1024.
    Units(units::UnitsArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli, config: &SizeDecorConfig) -> anyhow::Result<()> {
    match cli.command {
        Command::Format(args) => format::execute(args, config),
        Command::Scale(args) => scale::execute(&args),
        Command::Units(args) => units::execute(&args),
    }
}

/// Parses a size argument: an integer byte count or `null` for an absent size.
///
/// # Errors
///
/// Returns a message if the value is neither an integer nor `null`.
pub fn parse_size(value: &str) -> Result<SizeDecor, String> {
    if value.eq_ignore_ascii_case("null") {
        return Ok(SizeDecor::null());
    }
    value
        .parse::<i64>()
        .map(SizeDecor::from)
        .map_err(|e| format!("expected a byte count or `null`, got {value:?}: {e}"))
}
