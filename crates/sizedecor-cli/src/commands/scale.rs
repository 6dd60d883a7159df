//! `sizefmt scale` — Show how a magnitude is scaled to its unit.

use clap::Args;

use crate::output;

/// Arguments for the `scale` command.
#[derive(Args, Debug)]
pub struct ScaleArgs {
    /// Magnitude in bytes; may exceed the 64-bit integer range.
    #[arg(allow_negative_numbers = true)]
    pub bytes: f64,

    /// Print JSON instead of a tab-separated line.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `scale` command.
///
/// # Errors
///
/// Returns an error if output cannot be encoded.
pub fn execute(args: &ScaleArgs) -> anyhow::Result<()> {
    let scaled = sizedecor_core::scale(args.bytes);
    output::print_scaled(&scaled, args.json)
}
