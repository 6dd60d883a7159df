//! `sizefmt units` — List the unit suffix for every power of 1024.

use clap::Args;

use crate::output;

/// Arguments for the `units` command.
#[derive(Args, Debug)]
pub struct UnitsArgs {
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `units` command.
///
/// # Errors
///
/// Returns an error if output cannot be encoded.
pub fn execute(args: &UnitsArgs) -> anyhow::Result<()> {
    output::print_units(args.json)
}
