//! `sizefmt format` — Render one or more sizes.

use clap::Args;
use sizedecor_common::config::SizeDecorConfig;
use sizedecor_common::types::FormatOptions;
use sizedecor_core::SizeDecor;

use crate::output::{self, FormattedSize};

/// Arguments for the `format` command.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Sizes in bytes; `null` renders an absent size.
    #[arg(required = true, allow_negative_numbers = true, value_parser = super::parse_size)]
    pub sizes: Vec<SizeDecor>,

    /// Minimum field width.
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Pad on the right instead of the left.
    #[arg(short, long)]
    pub left: bool,

    /// Upper-case the output.
    #[arg(short, long)]
    pub upper: bool,

    /// Digits after the decimal point.
    #[arg(short, long, allow_negative_numbers = true)]
    pub precision: Option<i32>,

    /// printf-style directive such as `%-10.2S`; overrides the options above.
    #[arg(short, long, conflicts_with_all = ["width", "left", "upper", "precision"])]
    pub directive: Option<String>,

    /// Print JSON instead of one line per size.
    #[arg(long)]
    pub json: bool,
}

impl FormatArgs {
    /// Resolves the directives to apply, falling back to `defaults` for
    /// anything left unset on the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the directive cannot be parsed.
    pub fn resolve_options(&self, defaults: &FormatOptions) -> anyhow::Result<FormatOptions> {
        if let Some(directive) = &self.directive {
            return Ok(crate::directive::parse_directive(directive)?);
        }
        Ok(FormatOptions {
            width: self.width.unwrap_or(defaults.width),
            left_justify: self.left || defaults.left_justify,
            uppercase: self.upper || defaults.uppercase,
            precision: self.precision.unwrap_or(defaults.precision),
        })
    }
}

/// Executes the `format` command.
///
/// # Errors
///
/// Returns an error if the directive is invalid or output cannot be encoded.
pub fn execute(args: FormatArgs, config: &SizeDecorConfig) -> anyhow::Result<()> {
    let options = args.resolve_options(&config.defaults)?;
    tracing::debug!(?options, count = args.sizes.len(), "formatting sizes");

    let rows: Vec<FormattedSize> = args
        .sizes
        .iter()
        .map(|size| FormattedSize {
            size: *size,
            rendered: size.format(&options),
        })
        .collect();

    output::print_rows(&rows, args.json)
}
