//! The size decorator value object.

use std::fmt;

use serde::{Deserialize, Serialize};
use sizedecor_common::constants::NULL_TOKEN;
use sizedecor_common::types::{FormatFlags, FormatOptions};

use crate::formattable::Formattable;
use crate::scale::scale;

/// An optional byte count that renders as `1.5Kb`, `3Mb`, or `NULL`.
///
/// Two decorators are equal when their sizes are equal, absent included.
/// Negative sizes are accepted and render unscaled in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeDecor {
    size: Option<i64>,
}

impl SizeDecor {
    /// Wraps a size in bytes, or `None` for an absent size.
    #[must_use]
    pub const fn new(size: Option<i64>) -> Self {
        Self { size }
    }

    /// A decorator for an absent size.
    #[must_use]
    pub const fn null() -> Self {
        Self { size: None }
    }

    /// Returns the wrapped size.
    #[must_use]
    pub const fn size(&self) -> Option<i64> {
        self.size
    }

    /// Renders the size under `options`.
    ///
    /// An absent size always renders as `NULL`: width, justification, case
    /// and precision are ignored for it.
    #[must_use]
    pub fn format(&self, options: &FormatOptions) -> String {
        let Some(bytes) = self.size else {
            return NULL_TOKEN.to_string();
        };
        #[allow(clippy::cast_precision_loss)]
        let scaled = scale(bytes as f64);
        let body = scaled.render(options.fraction_digits());
        let width = options.width;
        let padded = if options.left_justify {
            format!("{body:<width$}")
        } else {
            format!("{body:>width$}")
        };
        if options.uppercase {
            padded.to_uppercase()
        } else {
            padded
        }
    }

    /// Renders the size from printf-style parts: a flag set, a width and a
    /// precision, where zero or negative width and precision mean "unset".
    #[must_use]
    pub fn format_to(&self, flags: FormatFlags, width: i32, precision: i32) -> String {
        self.format(&FormatOptions::from_parts(flags, width, precision))
    }
}

impl From<i64> for SizeDecor {
    fn from(size: i64) -> Self {
        Self::new(Some(size))
    }
}

impl From<Option<i64>> for SizeDecor {
    fn from(size: Option<i64>) -> Self {
        Self::new(size)
    }
}

impl Formattable for SizeDecor {
    fn write_formatted(&self, out: &mut dyn fmt::Write, options: &FormatOptions) -> fmt::Result {
        out.write_str(&self.format(options))
    }
}

/// Honors the formatter's width and precision. `<` alignment pads on the
/// right, anything else on the left, and `#` upper-cases the output.
///
/// Only these directives are read: padding is always spaces, so a fill
/// character is ignored, and `^` right-aligns like `>`.
impl fmt::Display for SizeDecor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = FormatOptions {
            width: f.width().unwrap_or(0),
            left_justify: matches!(f.align(), Some(fmt::Alignment::Left)),
            uppercase: f.alternate(),
            precision: f
                .precision()
                .map_or(0, |p| i32::try_from(p).unwrap_or(i32::MAX)),
        };
        f.write_str(&self.format(&options))
    }
}
