//! Fast conversion of double-precision floating point numbers to decimal
//! strings.
//!
//! The shortest-form conversion implements the Ryū algorithm (Ulf Adams,
//! PLDI 2018); the fixed- and scientific-precision conversions implement the
//! Ryū printf extension over 192-bit pow-of-10 tables; and a
//! `to_chars`-style dispatcher re-expands the shortest digits into
//! plain/scientific/fixed/general notation with an exact capacity check.
//!
//! The interface mimics that of [Ryu](https://docs.rs/ryu/): a copyable
//! [`Buffer`] owns the output bytes and hands back `&str` slices.

#![cfg_attr(not(test), no_std)]

mod tatsu;

pub use tatsu::to_chars::{FloatFormat, ValueTooLarge};
pub use tatsu::{d2exp_buffered_n, d2fixed_buffered_n, d2s_buffered_n, to_chars};

const NAN: &str = "NaN";
const POS_INF: &str = "inf";
const NEG_INF: &str = "-inf";

/// Size sufficient for any `f64` in any shortest-form notation: a sign,
/// `"0."`, up to 323 leading fractional zeros, and a 17-digit significand.
const BUFFER_LEN: usize = (1usize + 2 + 323 + 17).next_multiple_of(8);

/// Safe API for formatting floating point numbers to text.
///
/// ## Example
///
/// ```
/// let mut buffer = tatsu::Buffer::new();
/// let printed = buffer.format_finite(1.234);
/// assert_eq!(printed, "1.234");
/// ```
#[derive(Clone, Copy)]
pub struct Buffer {
    bytes: [u8; BUFFER_LEN],
}

impl Buffer {
    /// This is a cheap operation; you don't need to worry about reusing
    /// buffers for efficiency.
    pub fn new() -> Self {
        Buffer {
            bytes: [0; BUFFER_LEN],
        }
    }

    /// Print a floating point `num` into this buffer, and return a reference
    /// to its string representation within the buffer. The number is
    /// formatted as a decimal if that takes no more characters than
    /// scientific notation, and in scientific notation otherwise.
    ///
    /// This function formats NaN as the string `"NaN"`, positive infinity as
    /// `"inf"`, and negative infinity as `"-inf"`, to match [std::fmt].
    ///
    /// If `num` is known to be finite, you may get better performance by
    /// calling the [Self::format_finite] method instead.
    pub fn format(&mut self, num: f64) -> &str {
        self.with_specials(num, FloatFormat::Plain)
    }

    /// Like [`Self::format`], **provided that `num.is_finite()`**.
    ///
    /// This function **does not** check that `num` is indeed finite, for
    /// performance reasons; in that case it will print an unspecified (but
    /// valid) string.
    pub fn format_finite(&mut self, num: f64) -> &str {
        self.finite(num, FloatFormat::Plain)
    }

    /// Print a floating point `num` into this buffer in scientific notation
    /// (`"1.729e+03"`), and return a reference to its string representation
    /// within the buffer. Specials are handled as in [`Self::format`].
    pub fn format_sci(&mut self, num: f64) -> &str {
        self.with_specials(num, FloatFormat::Scientific)
    }

    /// Like [`Self::format_sci`], **provided that `num.is_finite()`**.
    pub fn format_sci_finite(&mut self, num: f64) -> &str {
        self.finite(num, FloatFormat::Scientific)
    }

    /// Print a floating point `num` into this buffer in fixed notation with
    /// no exponent (`"172900"`, `"0.001729"`), and return a reference to its
    /// string representation within the buffer. Specials are handled as in
    /// [`Self::format`].
    pub fn format_fixed(&mut self, num: f64) -> &str {
        self.with_specials(num, FloatFormat::Fixed)
    }

    /// Like [`Self::format_fixed`], **provided that `num.is_finite()`**.
    pub fn format_fixed_finite(&mut self, num: f64) -> &str {
        self.finite(num, FloatFormat::Fixed)
    }

    fn with_specials(&mut self, num: f64, fmt: FloatFormat) -> &str {
        if num.is_nan() {
            return NAN;
        }
        if num.is_infinite() {
            return if num.is_sign_negative() { NEG_INF } else { POS_INF };
        }
        self.finite(num, fmt)
    }

    fn finite(&mut self, num: f64, fmt: FloatFormat) -> &str {
        let sign = usize::from(num.is_sign_negative());
        self.bytes[0] = b'-';
        let n = sign + tatsu::to_chars::write_unchecked(&mut self.bytes[sign..], num.abs(), fmt);
        debug_assert!(n <= self.bytes.len());
        debug_assert!(self.bytes[..n].is_ascii());
        unsafe { core::str::from_utf8_unchecked(&self.bytes[..n]) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_len_covers_worst_cases() {
        let mut buffer = Buffer::new();
        assert_eq!(buffer.format_fixed(-5e-324).len(), 1 + 2 + 323 + 1);
        assert_eq!(buffer.format_fixed(-1.7976931348623157e308).len(), 310);
        assert!(BUFFER_LEN >= 1 + 2 + 323 + 17);
    }
}
