//! Display directives shared by the formatter and its callers.

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Requested output shape for a rendered size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Minimum field width in characters; `0` leaves the field unpadded.
    pub width: usize,
    /// Pad on the right instead of the left.
    pub left_justify: bool,
    /// Upper-case the whole field, padding included.
    pub uppercase: bool,
    /// Digits after the decimal point; zero or negative means none.
    pub precision: i32,
}

impl FormatOptions {
    /// Returns options with the given width.
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Returns options with left justification enabled.
    #[must_use]
    pub const fn left(mut self) -> Self {
        self.left_justify = true;
        self
    }

    /// Returns options with upper-casing enabled.
    #[must_use]
    pub const fn upper(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Returns options with the given precision.
    #[must_use]
    pub const fn precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    /// Number of fractional digits to render.
    #[must_use]
    pub fn fraction_digits(&self) -> usize {
        usize::try_from(self.precision).unwrap_or(0)
    }

    /// Builds options from a flag set, a width and a precision as handed
    /// over by a printf-style formatter, where `-1` means "not given".
    #[must_use]
    pub fn from_parts(flags: FormatFlags, width: i32, precision: i32) -> Self {
        Self {
            width: usize::try_from(width).unwrap_or(0),
            left_justify: flags.contains(FormatFlags::LEFT_JUSTIFY),
            uppercase: flags.contains(FormatFlags::UPPERCASE),
            precision,
        }
    }
}

/// Conversion flags passed along with a directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FormatFlags(u8);

impl FormatFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// `-` flag: pad on the right.
    pub const LEFT_JUSTIFY: Self = Self(1);
    /// Upper-case conversion (`%S`).
    pub const UPPERCASE: Self = Self(1 << 1);
    /// `#` flag. Accepted and ignored by size rendering.
    pub const ALTERNATE: Self = Self(1 << 2);

    /// Returns `true` if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for FormatFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_precision_means_no_digits() {
        assert_eq!(FormatOptions::default().precision(-3).fraction_digits(), 0);
        assert_eq!(FormatOptions::default().precision(0).fraction_digits(), 0);
        assert_eq!(FormatOptions::default().precision(4).fraction_digits(), 4);
    }

    #[test]
    fn from_parts_maps_flags() {
        let opts = FormatOptions::from_parts(
            FormatFlags::LEFT_JUSTIFY | FormatFlags::UPPERCASE,
            7,
            2,
        );
        assert_eq!(opts, FormatOptions::default().width(7).left().upper().precision(2));
    }

    #[test]
    fn from_parts_treats_missing_width_as_zero() {
        let opts = FormatOptions::from_parts(FormatFlags::NONE, -1, -1);
        assert_eq!(opts.width, 0);
        assert!(!opts.left_justify);
        assert!(!opts.uppercase);
        assert_eq!(opts.fraction_digits(), 0);
    }

    #[test]
    fn alternate_flag_is_independent() {
        let flags = FormatFlags::ALTERNATE;
        assert!(flags.contains(FormatFlags::ALTERNATE));
        assert!(!flags.contains(FormatFlags::UPPERCASE));
        assert!(flags.contains(FormatFlags::NONE));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts: FormatOptions =
            serde_json::from_str(r#"{"precision": 2}"#).expect("should parse");
        assert_eq!(opts, FormatOptions::default().precision(2));
    }
}
