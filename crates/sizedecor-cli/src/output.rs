//! Formatted output helpers for CLI commands.
//!
//! Every command prints either plain text or JSON; the line builders are
//! kept separate from printing so they can be tested.

use serde::Serialize;
use sizedecor_common::constants::SUFFIXES;
use sizedecor_core::{Scaled, SizeDecor};

/// One rendered size, as printed by `sizefmt format --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedSize {
    /// Input size; `null` when absent.
    pub size: SizeDecor,
    /// Rendered text.
    pub rendered: String,
}

/// One row of the unit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitRow {
    /// Power of 1024.
    pub power: usize,
    /// Unit suffix for that power.
    pub suffix: &'static str,
}

/// Returns the unit table rows.
#[must_use]
pub fn unit_rows() -> Vec<UnitRow> {
    SUFFIXES
        .iter()
        .copied()
        .enumerate()
        .map(|(power, suffix)| UnitRow { power, suffix })
        .collect()
}

/// Builds the text lines for rendered sizes.
#[must_use]
pub fn rendered_lines(rows: &[FormattedSize]) -> Vec<String> {
    rows.iter().map(|row| row.rendered.clone()).collect()
}

/// Builds the text line for a scaled magnitude.
#[must_use]
pub fn scaled_line(scaled: &Scaled) -> String {
    format!("{}\t{}\t{}", scaled.value, scaled.power, scaled.suffix)
}

/// Builds the text lines for the unit table.
#[must_use]
pub fn unit_lines() -> Vec<String> {
    let mut lines = vec![format!("{:<6} {}", "POWER", "SUFFIX")];
    lines.extend(
        unit_rows()
            .iter()
            .map(|row| format!("{:<6} {}", row.power, row.suffix)),
    );
    lines
}

/// Prints rendered sizes.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn print_rows(rows: &[FormattedSize], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        for line in rendered_lines(rows) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Prints a scaled magnitude.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn print_scaled(scaled: &Scaled, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(scaled)?);
    } else {
        println!("{}", scaled_line(scaled));
    }
    Ok(())
}

/// Prints the unit table.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn print_units(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&unit_rows())?);
    } else {
        for line in unit_lines() {
            println!("{line}");
        }
    }
    Ok(())
}
