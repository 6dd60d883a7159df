//! Parsing of printf-style string directives using `nom`.
//!
//! Accepts `%[-][width][.precision](s|S)`, the shape a size placeholder takes
//! in a log pattern, and turns it into [`FormatOptions`].

use nom::{
    IResult, Parser,
    character::complete::{char, digit1, one_of},
    combinator::opt,
    sequence::preceded,
};
use sizedecor_common::error::{Result, SizeDecorError};
use sizedecor_common::types::FormatOptions;

/// A directive split into its parts, before numeric conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawDirective<'a> {
    left: bool,
    width: Option<&'a str>,
    precision: Option<&'a str>,
    conversion: char,
}

fn raw_directive(input: &str) -> IResult<&str, RawDirective<'_>> {
    let (input, _) = char('%')(input)?;
    let (input, left) = opt(char('-')).parse(input)?;
    let (input, width) = opt(digit1).parse(input)?;
    let (input, precision) = opt(preceded(char('.'), digit1)).parse(input)?;
    let (input, conversion) = one_of("sS")(input)?;
    Ok((
        input,
        RawDirective {
            left: left.is_some(),
            width,
            precision,
            conversion,
        },
    ))
}

/// Parses a directive such as `%-10.2S` into display options.
///
/// `-` pads on the right and `S` upper-cases the output.
///
/// # Errors
///
/// Returns an error if the directive does not match the grammar, has
/// trailing input, or carries a width or precision out of range.
pub fn parse_directive(directive: &str) -> Result<FormatOptions> {
    let invalid = |message: String| SizeDecorError::Directive {
        directive: directive.to_string(),
        message,
    };

    let (rest, raw) = raw_directive(directive)
        .map_err(|e| invalid(format!("expected %[-][width][.precision](s|S) ({e})")))?;
    if !rest.is_empty() {
        return Err(invalid(format!("unexpected trailing input {rest:?}")));
    }

    let width = raw
        .width
        .map(str::parse::<usize>)
        .transpose()
        .map_err(|e| invalid(format!("width: {e}")))?
        .unwrap_or(0);
    let precision = raw
        .precision
        .map(str::parse::<i32>)
        .transpose()
        .map_err(|e| invalid(format!("precision: {e}")))?
        .unwrap_or(0);

    tracing::trace!(directive, width, precision, "parsed directive");
    Ok(FormatOptions {
        width,
        left_justify: raw.left,
        uppercase: raw.conversion == 'S',
        precision,
    })
}
