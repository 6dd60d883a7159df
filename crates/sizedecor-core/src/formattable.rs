//! Values that render themselves under explicit display directives.

use std::fmt;

use sizedecor_common::types::FormatOptions;

/// A value that knows how to render itself given width, justification,
/// case and precision directives.
///
/// Implementors only write to `out`; they never parse format strings.
pub trait Formattable {
    /// Writes the rendered value into `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if `out` refuses the write or the value cannot be
    /// rendered.
    fn write_formatted(&self, out: &mut dyn fmt::Write, options: &FormatOptions) -> fmt::Result;

    /// Renders the value into a new string.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`Formattable::write_formatted`]; no
    /// partially written output is returned.
    fn render(&self, options: &FormatOptions) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_formatted(&mut out, options)?;
        Ok(out)
    }
}
