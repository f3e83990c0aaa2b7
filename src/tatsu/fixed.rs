//! Fixed- and exponential-precision conversion: emits an explicit number of
//! fractional digits by walking 9-digit blocks of the exact decimal
//! expansion, with round-half-to-even at the cut.

use crate::tatsu::common::{decimal_length9, log10_pow2};
use crate::tatsu::digits::{
    append_c_digits, append_d_digits, append_n_digits, append_nine_digits, write_exponent_signed,
};
use crate::tatsu::intrinsics::{
    mul_shift_mod1e9, multiple_of_power_of_2, multiple_of_power_of_5,
};
use crate::tatsu::lut::pow10::{
    MIN_BLOCK_2, POW10_ADDITIONAL_BITS, POW10_OFFSET, POW10_OFFSET_2, POW10_SPLIT, POW10_SPLIT_2,
};
use crate::tatsu::shortest::{DOUBLE_BIAS, DOUBLE_MANTISSA_BITS};

#[inline]
pub fn index_for_exponent(e: u32) -> u32 {
    (e + 15) / 16
}

#[inline]
pub fn pow10_bits_for_index(idx: u32) -> u32 {
    16 * idx + POW10_ADDITIONAL_BITS
}

#[inline]
pub fn length_for_index(idx: u32) -> u32 {
    // +1 for ceil, +16 for the mantissa, +8 to round up when dividing by 9.
    (log10_pow2(16 * idx as i32) + 1 + 16 + 8) / 9
}

/// Splits nonzero finite `bits` into `(m2, e2)` with value `m2 · 2^e2`.
#[inline]
pub fn decode(bits: u64) -> (u64, i32) {
    let ieee_mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
    let ieee_exponent = (bits >> DOUBLE_MANTISSA_BITS) as u32;
    if ieee_exponent == 0 {
        (ieee_mantissa, 1 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32)
    } else {
        (
            (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa,
            ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32,
        )
    }
}

/// Writes the integer part of `m2 · 2^e2` (for `e2 >= -52`) and returns
/// `(bytes_written, saw_nonzero)`.
fn write_integer_part(m2: u64, e2: i32, result: &mut [u8]) -> (usize, bool) {
    let mut index = 0;
    let mut nonzero = false;
    let idx = if e2 < 0 { 0 } else { index_for_exponent(e2 as u32) };
    let p10bits = pow10_bits_for_index(idx);
    let len = length_for_index(idx);
    for i in (0..len as usize).rev() {
        let j = (p10bits as i32 - e2) as u32;
        // j is in [120, 172]; shifting m2 left by 8 pushes the shift amount
        // to 128 or above, where mul_shift_mod1e9 is defined.
        let digits = mul_shift_mod1e9(
            m2 << 8,
            &POW10_SPLIT[POW10_OFFSET[idx as usize] as usize + i],
            j + 8,
        );
        if nonzero {
            append_nine_digits(digits, &mut result[index..]);
            index += 9;
        } else if digits != 0 {
            let olength = decimal_length9(digits) as usize;
            append_n_digits(olength, digits, &mut result[index..]);
            index += olength;
            nonzero = true;
        }
    }
    (index, nonzero)
}

/// Writes `f` in fixed notation with exactly `precision` fractional digits,
/// banker's rounded; returns the byte count. `f` must be finite and
/// nonnegative, and the buffer must hold at least `precision + 326` bytes.
pub fn d2fixed_buffered_n(f: f64, precision: u32, result: &mut [u8]) -> usize {
    let bits = f.to_bits();
    let precision = precision as usize;

    if bits == 0 {
        result[0] = b'0';
        if precision == 0 {
            return 1;
        }
        result[1] = b'.';
        result[2..2 + precision].fill(b'0');
        return 2 + precision;
    }

    let (m2, e2) = decode(bits);
    let mut index = 0;
    let mut nonzero = false;
    if e2 >= -52 {
        let (n, saw) = write_integer_part(m2, e2, result);
        index = n;
        nonzero = saw;
    }
    if !nonzero {
        result[index] = b'0';
        index += 1;
    }
    if precision > 0 {
        result[index] = b'.';
        index += 1;
    }
    if e2 >= 0 {
        result[index..index + precision].fill(b'0');
        return index + precision;
    }

    let idx = (-e2 / 16) as usize;
    let blocks = precision / 9 + 1;
    // 0 = don't round up; 1 = round up unconditionally; 2 = round up if odd.
    let mut round_up = 0u8;
    let mut i = 0;
    if blocks <= MIN_BLOCK_2[idx] as usize {
        // The entire requested range is leading zeros.
        i = blocks;
        result[index..index + precision].fill(b'0');
        index += precision;
    } else if i < MIN_BLOCK_2[idx] as usize {
        i = MIN_BLOCK_2[idx] as usize;
        result[index..index + 9 * i].fill(b'0');
        index += 9 * i;
    }
    while i < blocks {
        let j = (POW10_ADDITIONAL_BITS as i32 - e2 - 16 * idx as i32) as u32;
        let p = POW10_OFFSET_2[idx] as usize + i - MIN_BLOCK_2[idx] as usize;
        if p >= POW10_OFFSET_2[idx + 1] as usize {
            // The remaining digits are all zero; no rounding can occur.
            let fill = precision - 9 * i;
            result[index..index + fill].fill(b'0');
            index += fill;
            break;
        }
        let mut digits = mul_shift_mod1e9(m2 << 8, &POW10_SPLIT_2[p], j + 8);
        if i < blocks - 1 {
            append_nine_digits(digits, &mut result[index..]);
            index += 9;
            i += 1;
            continue;
        }
        let maximum = precision - 9 * i;
        let mut last_digit = 0;
        for _ in 0..9 - maximum {
            last_digit = digits % 10;
            digits /= 10;
        }
        if last_digit != 5 {
            round_up = u8::from(last_digit > 5);
        } else {
            // The exact tail is ...500... iff m2 · 10^(precision + 1) is
            // divisible by 2^-e2.
            let required_twos = -e2 - precision as i32 - 1;
            let trailing_zeros = required_twos <= 0
                || (required_twos < 60 && multiple_of_power_of_2(m2, required_twos as u32));
            round_up = if trailing_zeros { 2 } else { 1 };
        }
        if maximum > 0 {
            append_c_digits(maximum, digits, &mut result[index..]);
            index += maximum;
        }
        break;
    }
    if round_up != 0 {
        let mut round_index = index as isize;
        let mut dot_index = 0; // '.' can't be located at index 0
        loop {
            round_index -= 1;
            if round_index == -1 {
                // Carried past the most significant digit: the number gains
                // a digit and the decimal point moves one place right.
                result[0] = b'1';
                if dot_index > 0 {
                    result[dot_index] = b'0';
                    result[dot_index + 1] = b'.';
                }
                result[index] = b'0';
                index += 1;
                break;
            }
            let c = result[round_index as usize];
            if c == b'.' {
                dot_index = round_index as usize;
            } else if c == b'9' {
                result[round_index as usize] = b'0';
                round_up = 1;
            } else {
                if round_up == 2 && c % 2 == 0 {
                    break;
                }
                result[round_index as usize] = c + 1;
                break;
            }
        }
    }
    index
}

/// Writes `f` in scientific notation with exactly `precision` fractional
/// digits, banker's rounded; returns the byte count. `f` must be finite and
/// nonnegative, and the buffer must hold at least `precision + 9` bytes.
pub fn d2exp_buffered_n(f: f64, precision: u32, result: &mut [u8]) -> usize {
    let bits = f.to_bits();
    let mut precision = precision as usize;

    if bits == 0 {
        result[0] = b'0';
        let mut index = 1;
        if precision > 0 {
            result[1] = b'.';
            result[2..2 + precision].fill(b'0');
            index = 2 + precision;
        }
        result[index..index + 4].copy_from_slice(b"e+00");
        return index + 4;
    }

    let (m2, e2) = decode(bits);
    let print_decimal_point = precision > 0;
    precision += 1;

    let mut index = 0;
    let mut digits = 0;
    let mut printed_digits = 0;
    let mut available_digits = 0;
    let mut exp = 0i32;
    if e2 >= -52 {
        let idx = if e2 < 0 { 0 } else { index_for_exponent(e2 as u32) };
        let p10bits = pow10_bits_for_index(idx);
        let len = length_for_index(idx);
        for i in (0..len as usize).rev() {
            let j = (p10bits as i32 - e2) as u32;
            digits = mul_shift_mod1e9(
                m2 << 8,
                &POW10_SPLIT[POW10_OFFSET[idx as usize] as usize + i],
                j + 8,
            );
            if printed_digits != 0 {
                if printed_digits + 9 > precision {
                    available_digits = 9;
                    break;
                }
                append_nine_digits(digits, &mut result[index..]);
                index += 9;
                printed_digits += 9;
            } else if digits != 0 {
                available_digits = decimal_length9(digits) as usize;
                exp = (i * 9 + available_digits - 1) as i32;
                if available_digits > precision {
                    break;
                }
                if print_decimal_point {
                    append_d_digits(available_digits, digits, &mut result[index..]);
                    index += available_digits + 1; // +1 for the decimal point
                } else {
                    result[index] = b'0' + digits as u8;
                    index += 1;
                }
                printed_digits = available_digits;
                available_digits = 0;
            }
        }
    }

    if e2 < 0 && available_digits == 0 {
        let idx = (-e2 / 16) as usize;
        for i in MIN_BLOCK_2[idx] as usize..200 {
            let j = (POW10_ADDITIONAL_BITS as i32 - e2 - 16 * idx as i32) as u32;
            let p = POW10_OFFSET_2[idx] as usize + i - MIN_BLOCK_2[idx] as usize;
            digits = if p >= POW10_OFFSET_2[idx + 1] as usize {
                0
            } else {
                mul_shift_mod1e9(m2 << 8, &POW10_SPLIT_2[p], j + 8)
            };
            if printed_digits != 0 {
                if printed_digits + 9 > precision {
                    available_digits = 9;
                    break;
                }
                append_nine_digits(digits, &mut result[index..]);
                index += 9;
                printed_digits += 9;
            } else if digits != 0 {
                available_digits = decimal_length9(digits) as usize;
                exp = -((i as i32 + 1) * 9) + available_digits as i32 - 1;
                if available_digits > precision {
                    break;
                }
                if print_decimal_point {
                    append_d_digits(available_digits, digits, &mut result[index..]);
                    index += available_digits + 1;
                } else {
                    result[index] = b'0' + digits as u8;
                    index += 1;
                }
                printed_digits = available_digits;
                available_digits = 0;
            }
        }
    }

    let maximum = precision - printed_digits;
    if available_digits == 0 {
        digits = 0;
    }
    let mut last_digit = 0;
    if available_digits > maximum {
        for _ in 0..available_digits - maximum {
            last_digit = digits % 10;
            digits /= 10;
        }
    }
    // 0 = don't round up; 1 = round up unconditionally; 2 = round up if odd.
    let mut round_up = 0u8;
    if last_digit != 5 {
        round_up = u8::from(last_digit > 5);
    } else {
        // The exact tail is ...500... iff m2 · 2^e2 · 10^(precision - exp)
        // is an integer; precision was already incremented by one.
        let rexp = precision as i32 - exp;
        let required_twos = -e2 - rexp;
        let mut trailing_zeros = required_twos <= 0
            || (required_twos < 60 && multiple_of_power_of_2(m2, required_twos as u32));
        if rexp < 0 {
            let required_fives = -rexp;
            trailing_zeros = trailing_zeros && multiple_of_power_of_5(m2, required_fives as u32);
        }
        round_up = if trailing_zeros { 2 } else { 1 };
    }
    if printed_digits != 0 {
        if digits == 0 {
            result[index..index + maximum].fill(b'0');
        } else {
            append_c_digits(maximum, digits, &mut result[index..]);
        }
        index += maximum;
    } else if print_decimal_point {
        append_d_digits(maximum, digits, &mut result[index..]);
        index += maximum + 1;
    } else {
        result[index] = b'0' + digits as u8;
        index += 1;
    }
    if round_up != 0 {
        let mut round_index = index as isize;
        loop {
            round_index -= 1;
            if round_index == -1 {
                // Carried past the most significant digit; the exponent grows.
                result[0] = b'1';
                exp += 1;
                break;
            }
            let c = result[round_index as usize];
            if c == b'.' {
                continue;
            } else if c == b'9' {
                result[round_index as usize] = b'0';
                round_up = 1;
            } else {
                if round_up == 2 && c % 2 == 0 {
                    break;
                }
                result[round_index as usize] = c + 1;
                break;
            }
        }
    }
    index + write_exponent_signed(exp, &mut result[index..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(f: f64, precision: u32) -> String {
        let mut buf = vec![0u8; precision as usize + 326];
        let n = d2fixed_buffered_n(f, precision, &mut buf);
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    fn exp(f: f64, precision: u32) -> String {
        let mut buf = vec![0u8; precision as usize + 9];
        let n = d2exp_buffered_n(f, precision, &mut buf);
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn fixed_basic() {
        assert_eq!(fixed(0.0, 0), "0");
        assert_eq!(fixed(0.0, 4), "0.0000");
        assert_eq!(fixed(1.0, 0), "1");
        assert_eq!(fixed(1.0, 2), "1.00");
        assert_eq!(fixed(0.1, 20), "0.10000000000000000555");
        assert_eq!(fixed(123.456, 3), "123.456");
        assert_eq!(fixed(1e15, 0), "1000000000000000");
        assert_eq!(fixed(1e23, 0), "99999999999999991611392");
    }

    #[test]
    fn fixed_banker_rounding() {
        // Exact ties round to even.
        assert_eq!(fixed(1.5, 0), "2");
        assert_eq!(fixed(2.5, 0), "2");
        assert_eq!(fixed(0.125, 2), "0.12");
        assert_eq!(fixed(0.375, 2), "0.38");
        // Non-tie tails round by magnitude.
        assert_eq!(fixed(9.999999999999999e-4, 3), "0.001");
        assert_eq!(fixed(0.996, 2), "1.00");
    }

    #[test]
    fn fixed_carry_across_point() {
        assert_eq!(fixed(9.995, 2), "9.99"); // exact value is 9.99499…
        assert_eq!(fixed(999.95, 1), "1000.0"); // exact value is 999.9500…0454…
        assert_eq!(fixed(0.99999999, 4), "1.0000");
    }

    #[test]
    fn fixed_subnormal() {
        // The smallest subnormal is 5^1074 / 10^1074; its full expansion has
        // 1074 fractional digits and ends in …265625.
        let s = fixed(5e-324, 1074);
        assert_eq!(s.len(), 2 + 1074);
        assert!(s.starts_with("0.000"));
        assert!(s.ends_with("265625"));
    }

    #[test]
    fn exp_basic() {
        assert_eq!(exp(0.0, 0), "0e+00");
        assert_eq!(exp(0.0, 2), "0.00e+00");
        assert_eq!(exp(1.0, 0), "1e+00");
        assert_eq!(exp(0.1, 0), "1e-01");
        assert_eq!(exp(0.1, 17), "1.00000000000000006e-01");
        assert_eq!(exp(1729.0, 3), "1.729e+03");
        assert_eq!(exp(5e-324, 0), "5e-324");
        assert_eq!(exp(1.7976931348623157e308, 16), "1.7976931348623157e+308");
    }

    #[test]
    fn exp_rounding() {
        assert_eq!(exp(2.5, 0), "2e+00");
        assert_eq!(exp(3.5, 0), "4e+00");
        assert_eq!(exp(9.999, 2), "1.00e+01");
        assert_eq!(exp(0.000123456789, 4), "1.2346e-04");
    }

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20_000))]

        // `{:.p$}` / `{:.p$e}` round half to even from the exact value, the
        // same contract as the kernels.
        #[test]
        fn fixed_matches_core_fmt(
            bits in 0u64..(0x7ffu64 << 52),
            precision in 0u32..25,
        ) {
            let f = f64::from_bits(bits);
            let expected = format!("{:.*}", precision as usize, f);
            prop_assert_eq!(fixed(f, precision), expected);
        }

        #[test]
        fn exp_matches_core_fmt(
            bits in 0u64..(0x7ffu64 << 52),
            precision in 0u32..25,
        ) {
            let f = f64::from_bits(bits);
            // core formats the exponent without zero padding; normalize.
            let std = format!("{:.*e}", precision as usize, f);
            let (mantissa, e) = std.split_once('e').unwrap();
            let (sign, digits) = match e.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', e),
            };
            let expected = format!("{}e{}{:0>2}", mantissa, sign, digits);
            prop_assert_eq!(exp(f, precision), expected);
        }
    }
}
