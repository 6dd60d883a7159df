//! Unit table and fixed tokens used when rendering sizes.

/// Divisor between two adjacent units.
pub const BASE: f64 = 1024.0;

/// Highest power of [`BASE`] with a unit of its own (yottabytes).
pub const MAX_POWER: usize = 8;

/// Unit suffix for each power of [`BASE`], indexed by power.
pub const SUFFIXES: [&str; MAX_POWER + 1] = ["b", "Kb", "Mb", "Gb", "Tb", "Pb", "Eb", "Zb", "Yb"];

/// Rendered in place of an absent size.
pub const NULL_TOKEN: &str = "NULL";

/// Log filter used by the CLI when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "sizefmt";

/// Returns the suffix for `power`, clamped to the largest unit.
#[must_use]
pub fn suffix_for(power: usize) -> &'static str {
    SUFFIXES[power.min(MAX_POWER)]
}
