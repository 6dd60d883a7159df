//! Power-of-1024 scaling and suffix selection.

use std::iter;

use serde::Serialize;
use sizedecor_common::constants::{BASE, MAX_POWER, suffix_for};

/// A magnitude reduced to its display unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scaled {
    /// Magnitude expressed in `suffix` units.
    pub value: f64,
    /// Number of times the input was divided by 1024.
    pub power: usize,
    /// Unit for `power`.
    pub suffix: &'static str,
}

impl Scaled {
    /// Renders the value with `digits` fractional digits followed by the
    /// suffix, e.g. `1.5Kb`. Ties round up, so 2.5 Kb renders as `3Kb`.
    #[must_use]
    pub fn render(&self, digits: usize) -> String {
        format!("{}{}", fixed_half_up(self.value, digits), self.suffix)
    }
}

/// Renders `value` with exactly `digits` fractional digits, rounding the
/// shortest decimal representation half away from zero.
fn fixed_half_up(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format!("{value:.digits$}");
    }
    // `Display` for f64 never switches to exponent notation.
    let repr = value.abs().to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut buf: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(iter::repeat(b'0')).take(digits))
        .collect();
    if fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        carry(&mut buf);
    }

    let split = buf.len() - digits;
    let mut out = String::with_capacity(buf.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(buf[..split].iter().copied().map(char::from));
    if digits > 0 {
        out.push('.');
        out.extend(buf[split..].iter().copied().map(char::from));
    }
    out
}

/// Adds one to the last digit of an ASCII digit string.
fn carry(buf: &mut Vec<u8>) {
    for digit in buf.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    buf.insert(0, b'1');
}

/// Divides `bytes` by 1024 until the quotient would drop below one or the
/// yottabyte unit is reached.
///
/// At the cap the value keeps whatever magnitude is left, so `1024^9`
/// bytes scale to `1024 Yb`. Values below 1024 (including zero and
/// negatives) are returned unchanged in bytes.
#[must_use]
pub fn scale(bytes: f64) -> Scaled {
    let mut value = bytes;
    let mut power = 0;
    while value / BASE >= 1.0 && power < MAX_POWER {
        value /= BASE;
        power += 1;
    }
    let suffix = suffix_for(power);
    tracing::trace!(bytes, power, suffix, "scaled size");
    Scaled {
        value,
        power,
        suffix,
    }
}
