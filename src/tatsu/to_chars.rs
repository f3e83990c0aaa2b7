//! Format dispatcher: renders the shortest decimal digits in fixed or
//! scientific notation under a `to_chars`-style format selector, with an
//! exact-length capacity check up front.

use core::fmt;

use crate::tatsu::common::{decimal_length9, decimal_length17};
use crate::tatsu::digits::{write_exponent_signed, write_mantissa};
use crate::tatsu::fixed::{
    d2fixed_buffered_n, index_for_exponent, length_for_index, pow10_bits_for_index,
};
use crate::tatsu::intrinsics::mul_shift_mod1e9;
use crate::tatsu::lut::pow10::{POW10_OFFSET, POW10_SPLIT};
use crate::tatsu::shortest::{
    d2d, d2d_small_int, FloatingDecimal64, DOUBLE_BIAS, DOUBLE_MANTISSA_BITS,
};

/// Output notation selector, mirroring C++ `chars_format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatFormat {
    /// Fixed notation when the value is near one, scientific otherwise;
    /// whichever recovers the value in fewer bytes.
    Plain,
    /// Always scientific: `d[.ddd]e±XX`.
    Scientific,
    /// Always fixed: no exponent, full integer and fraction digits.
    Fixed,
    /// `printf("%g")`-style selection on the scientific exponent.
    General,
}

/// The output buffer is too small for the formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueTooLarge;

impl fmt::Display for ValueTooLarge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("output buffer too small for the formatted value")
    }
}

impl core::error::Error for ValueTooLarge {}

/// `⌊(2^53 - 1) / 5^e⌋`: a mantissa with its trailing zero bits removed can
/// be scaled by `10^e` without rounding iff it stays at or below entry `e`.
#[rustfmt::skip]
static MAX_SHIFTED_MANTISSA: [u64; 23] = [
    9007199254740991,
    1801439850948198,
    360287970189639,
    72057594037927,
    14411518807585,
    2882303761517,
    576460752303,
    115292150460,
    23058430092,
    4611686018,
    922337203,
    184467440,
    36893488,
    7378697,
    1475739,
    295147,
    59029,
    11805,
    2361,
    472,
    94,
    18,
    3,
];

/// Entry `e` is 1 iff the binary64 nearest to `10^e` is below `10^e`, in
/// which case its exact integer expansion has `e` digits rather than `e + 1`
/// (e.g. 1e23 is exactly 99999999999999991611392, 23 digits instead of 24).
#[rustfmt::skip]
static POW10_LENGTH_ADJUSTMENT: [u8; 309] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1,
    0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 1, 1,
    1, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1,
    1, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0,
    1, 0, 0, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1,
    0, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0,
    1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1,
    0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0,
    0, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0,
    0, 0, 0, 0, 1, 1, 0, 1, 0,
];

/// How a given value will be rendered under a given format.
enum Notation {
    /// Bit pattern zero.
    Zero,
    /// Scientific rendition of the shortest digits.
    Scientific(FloatingDecimal64),
    /// Fixed rendition of the shortest digits (integer zero padding only
    /// when exact).
    FixedDigits(FloatingDecimal64),
    /// Exact integer expansion through the fixed-precision kernel, `digits`
    /// bytes long.
    FixedExact { digits: usize },
}

/// Digit count of `⌊m2 · 2^e2⌋` for `e2 > 0`, by scanning the 9-digit blocks
/// from the top for the first nonzero one.
fn fixed_integer_length(m2: u64, e2: i32) -> usize {
    debug_assert!(e2 > 0);
    let idx = index_for_exponent(e2 as u32);
    let p10bits = pow10_bits_for_index(idx);
    for i in (0..length_for_index(idx) as usize).rev() {
        let digits = mul_shift_mod1e9(
            m2 << 8,
            &POW10_SPLIT[POW10_OFFSET[idx as usize] as usize + i],
            (p10bits as i32 - e2 + 8) as u32,
        );
        if digits != 0 {
            return decimal_length9(digits) as usize + 9 * i;
        }
    }
    // m2 >= 2^52, so the scan always finds a nonzero block.
    unreachable!()
}

fn plan(bits: u64, fmt: FloatFormat) -> Notation {
    if bits == 0 {
        return Notation::Zero;
    }
    let ieee_mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
    let ieee_exponent = (bits >> DOUBLE_MANTISSA_BITS) as u32;

    if fmt == FloatFormat::Fixed {
        // Integers of 2^53 and beyond never re-expand from the shortest
        // digits; print them exactly instead.
        let e2 = ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32;
        if e2 > 0 {
            let m2 = (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa;
            return Notation::FixedExact {
                digits: fixed_integer_length(m2, e2),
            };
        }
    }

    let v = match d2d_small_int(ieee_mantissa, ieee_exponent) {
        Some(mut v) => {
            // Move trailing decimal zeros into the exponent.
            while v.mantissa % 10 == 0 {
                v.mantissa /= 10;
                v.exponent += 1;
            }
            v
        }
        None => d2d(ieee_mantissa, ieee_exponent),
    };

    let olength = decimal_length17(v.mantissa) as i32;
    let scientific_exponent = v.exponent + olength - 1;
    let use_fixed = match fmt {
        // Whichever of "17.29" and "1.729e+01" is shorter; scientific wins
        // ties.
        FloatFormat::Plain => {
            if olength == 1 {
                -3 <= v.exponent && v.exponent <= 4
            } else {
                -(olength + 3) <= v.exponent && v.exponent <= 5
            }
        }
        FloatFormat::General => -4 <= scientific_exponent && scientific_exponent < 6,
        FloatFormat::Fixed => true,
        FloatFormat::Scientific => false,
    };
    if !use_fixed {
        return Notation::Scientific(v);
    }

    if v.exponent > 0 {
        // Zero-padding the shortest digits is only sound when
        // mantissa · 10^exponent is exactly representable; its odd part
        // times 5^exponent must fit in 53 bits.
        let e = v.exponent as usize;
        let shifted = v.mantissa >> v.mantissa.trailing_zeros();
        if e < MAX_SHIFTED_MANTISSA.len() && shifted <= MAX_SHIFTED_MANTISSA[e] {
            return Notation::FixedDigits(v);
        }
        let mut digits = olength as usize + e;
        if v.mantissa == 1 {
            digits -= POW10_LENGTH_ADJUSTMENT[e] as usize;
        }
        return Notation::FixedExact { digits };
    }
    Notation::FixedDigits(v)
}

fn required_length(notation: &Notation, fmt: FloatFormat) -> usize {
    match *notation {
        Notation::Zero => {
            if fmt == FloatFormat::Scientific {
                5
            } else {
                1
            }
        }
        Notation::Scientific(v) => {
            let olength = decimal_length17(v.mantissa) as usize;
            let scientific_exponent = v.exponent + olength as i32 - 1;
            let exp_digits = if scientific_exponent.unsigned_abs() >= 100 { 3 } else { 2 };
            olength + usize::from(olength > 1) + 2 + exp_digits
        }
        Notation::FixedDigits(v) => {
            let olength = decimal_length17(v.mantissa) as usize;
            if v.exponent >= 0 {
                olength + v.exponent as usize
            } else {
                let whole_digits = olength as i32 + v.exponent;
                if whole_digits > 0 {
                    olength + 1
                } else {
                    (2 - v.exponent) as usize
                }
            }
        }
        Notation::FixedExact { digits } => digits,
    }
}

fn write_scientific(v: FloatingDecimal64, result: &mut [u8]) -> usize {
    let olength = decimal_length17(v.mantissa) as usize;
    // Emit the digits one position right, then pull the leading digit left
    // around the decimal point.
    write_mantissa(v.mantissa, olength, &mut result[1..olength + 1]);
    result[0] = result[1];
    let mut index = 1;
    if olength > 1 {
        result[1] = b'.';
        index = olength + 1;
    }
    let scientific_exponent = v.exponent + olength as i32 - 1;
    index + write_exponent_signed(scientific_exponent, &mut result[index..])
}

fn write_fixed(v: FloatingDecimal64, result: &mut [u8]) -> usize {
    let olength = decimal_length17(v.mantissa) as usize;
    if v.exponent >= 0 {
        let zeros = v.exponent as usize;
        write_mantissa(v.mantissa, olength, result);
        result[olength..olength + zeros].fill(b'0');
        return olength + zeros;
    }
    let whole_digits = olength as i32 + v.exponent;
    if whole_digits > 0 {
        // Mixed form: open a one-byte gap for the decimal point.
        let whole_digits = whole_digits as usize;
        write_mantissa(v.mantissa, olength, result);
        result.copy_within(whole_digits..olength, whole_digits + 1);
        result[whole_digits] = b'.';
        olength + 1
    } else {
        let zeros = (-whole_digits) as usize;
        result[0] = b'0';
        result[1] = b'.';
        result[2..2 + zeros].fill(b'0');
        write_mantissa(v.mantissa, olength, &mut result[2 + zeros..2 + zeros + olength]);
        2 + zeros + olength
    }
}

fn write_notation(f: f64, notation: &Notation, fmt: FloatFormat, result: &mut [u8]) -> usize {
    match *notation {
        Notation::Zero => {
            if fmt == FloatFormat::Scientific {
                result[..5].copy_from_slice(b"0e+00");
                5
            } else {
                result[0] = b'0';
                1
            }
        }
        Notation::Scientific(v) => write_scientific(v, result),
        Notation::FixedDigits(v) => write_fixed(v, result),
        Notation::FixedExact { .. } => d2fixed_buffered_n(f, 0, result),
    }
}

/// Writes `f` under `fmt` without a capacity check; the caller guarantees
/// the buffer is large enough. `f` must be finite and nonnegative.
pub(crate) fn write_unchecked(result: &mut [u8], f: f64, fmt: FloatFormat) -> usize {
    write_notation(f, &plan(f.to_bits(), fmt), fmt, result)
}

/// Writes `f` under `fmt` and returns the byte count, or
/// `Err(ValueTooLarge)` — leaving the buffer untouched — when `result` is
/// too small. `f` must be finite and nonnegative.
pub fn to_chars(result: &mut [u8], f: f64, fmt: FloatFormat) -> Result<usize, ValueTooLarge> {
    let notation = plan(f.to_bits(), fmt);
    let required = required_length(&notation, fmt);
    if result.len() < required {
        return Err(ValueTooLarge);
    }
    let written = write_notation(f, &notation, fmt, result);
    debug_assert_eq!(written, required);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(f: f64, fmt: FloatFormat) -> String {
        let mut buf = [0u8; 384];
        let n = to_chars(&mut buf, f, fmt).unwrap();
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn zero() {
        assert_eq!(chars(0.0, FloatFormat::Plain), "0");
        assert_eq!(chars(0.0, FloatFormat::Fixed), "0");
        assert_eq!(chars(0.0, FloatFormat::General), "0");
        assert_eq!(chars(0.0, FloatFormat::Scientific), "0e+00");
    }

    #[test]
    fn plain_selection() {
        assert_eq!(chars(1.0, FloatFormat::Plain), "1");
        assert_eq!(chars(10.0, FloatFormat::Plain), "10");
        assert_eq!(chars(0.001, FloatFormat::Plain), "0.001");
        assert_eq!(chars(0.0001, FloatFormat::Plain), "1e-04");
        assert_eq!(chars(17.29, FloatFormat::Plain), "17.29");
        assert_eq!(chars(1729.0, FloatFormat::Plain), "1729");
        assert_eq!(chars(172900.0, FloatFormat::Plain), "172900");
        assert_eq!(chars(0.001729, FloatFormat::Plain), "0.001729");
        assert_eq!(chars(1e-7, FloatFormat::Plain), "1e-07");
        assert_eq!(chars(1e23, FloatFormat::Plain), "1e+23");
    }

    #[test]
    fn general_selection() {
        assert_eq!(chars(1e23, FloatFormat::General), "1e+23");
        assert_eq!(chars(1.5, FloatFormat::General), "1.5");
        assert_eq!(chars(123456.0, FloatFormat::General), "123456");
        assert_eq!(chars(1234567.0, FloatFormat::General), "1.234567e+06");
        assert_eq!(chars(0.0001, FloatFormat::General), "0.0001");
        assert_eq!(chars(0.00001, FloatFormat::General), "1e-05");
    }

    #[test]
    fn scientific() {
        assert_eq!(chars(0.1, FloatFormat::Scientific), "1e-01");
        assert_eq!(chars(1e100, FloatFormat::Scientific), "1e+100");
        assert_eq!(chars(1729.0, FloatFormat::Scientific), "1.729e+03");
        assert_eq!(chars(5e-324, FloatFormat::Scientific), "5e-324");
    }

    #[test]
    fn fixed_exact_fallback() {
        // 1e23 is not exactly representable; fixed form prints the exact
        // integer, one digit shorter than mantissa-plus-zeros would be.
        assert_eq!(chars(1e23, FloatFormat::Fixed), "99999999999999991611392");
        assert_eq!(chars(2e23, FloatFormat::Fixed), "199999999999999983222784");
        // 1e22 is the largest exactly representable power of ten.
        assert_eq!(chars(1e22, FloatFormat::Fixed), "10000000000000000000000");
        assert_eq!(
            chars(f64::MAX, FloatFormat::Fixed),
            format!("{:.0}", f64::MAX)
        );
    }

    #[test]
    fn capacity() {
        let cases = [
            (17.29, FloatFormat::Plain),
            (1e23, FloatFormat::Fixed),
            (1e23, FloatFormat::Scientific),
            (0.001729, FloatFormat::Fixed),
            (5e-324, FloatFormat::Fixed),
            (0.0, FloatFormat::Scientific),
        ];
        for (f, fmt) in cases {
            let mut buf = [0u8; 2048];
            let n = to_chars(&mut buf, f, fmt).unwrap();
            assert_eq!(to_chars(&mut buf[..n], f, fmt).unwrap(), n, "exact fit");
            let mut short = vec![0xa5u8; n - 1];
            assert_eq!(to_chars(&mut short, f, fmt), Err(ValueTooLarge));
            assert!(short.iter().all(|&b| b == 0xa5), "nothing written");
        }
    }

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50_000))]

        #[test]
        fn round_trip_all_formats(bits in 0u64..(0x7ffu64 << 52)) {
            let f = f64::from_bits(bits);
            let mut buf = [0u8; 2048];
            for fmt in [
                FloatFormat::Plain,
                FloatFormat::Scientific,
                FloatFormat::Fixed,
                FloatFormat::General,
            ] {
                let n = to_chars(&mut buf, f, fmt).unwrap();
                let s = core::str::from_utf8(&buf[..n]).unwrap();
                prop_assert_eq!(s.parse::<f64>().unwrap(), f);
            }
        }

        #[test]
        fn plain_is_idempotent(bits in 0u64..(0x7ffu64 << 52)) {
            let f = f64::from_bits(bits);
            let mut buf = [0u8; 384];
            let n = to_chars(&mut buf, f, FloatFormat::Plain).unwrap();
            let first = core::str::from_utf8(&buf[..n]).unwrap().to_owned();
            let reparsed: f64 = first.parse().unwrap();
            let mut buf2 = [0u8; 384];
            let n2 = to_chars(&mut buf2, reparsed, FloatFormat::Plain).unwrap();
            prop_assert_eq!(first, core::str::from_utf8(&buf2[..n2]).unwrap());
        }
    }
}
