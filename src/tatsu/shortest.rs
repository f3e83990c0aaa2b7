//! Shortest round-trip conversion: maps a decoded binary64 to the decimal
//! `mantissa · 10^exponent` with the fewest digits that still parses back to
//! the same bits.

use crate::tatsu::common::{log10_pow2, log10_pow5, pow5bits};
use crate::tatsu::intrinsics::{mul_shift_all, multiple_of_power_of_2, multiple_of_power_of_5};
use crate::tatsu::lut::pow5::{
    DOUBLE_POW5_BITCOUNT, DOUBLE_POW5_INV_BITCOUNT, DOUBLE_POW5_INV_SPLIT, DOUBLE_POW5_SPLIT,
};

pub const DOUBLE_MANTISSA_BITS: u32 = 52;
pub const DOUBLE_BIAS: i32 = 1023;

/// A decimal representation `mantissa · 10^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingDecimal64 {
    pub mantissa: u64,
    pub exponent: i32,
}

/// The core shortest-form kernel, on a sign-stripped nonzero finite input.
pub fn d2d(ieee_mantissa: u64, ieee_exponent: u32) -> FloatingDecimal64 {
    // Step 1: decode, unifying normalized and subnormal cases. Subtracting 2
    // more from the exponent gives the bounds computation 2 extra bits.
    let (m2, e2) = if ieee_exponent == 0 {
        (
            ieee_mantissa,
            1 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32 - 2,
        )
    } else {
        (
            (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa,
            ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32 - 2,
        )
    };
    let even = m2 & 1 == 0;
    let accept_bounds = even;

    // Step 2: the interval of valid decimal representations. The endpoints
    // are mp = mv + 2 and mm = mv - 1 - mm_shift, computed on the fly.
    let mv = 4 * m2;
    let mm_shift = u64::from(ieee_mantissa != 0 || ieee_exponent <= 1);

    // Step 3: convert to a decimal power base with 128-bit multiplies.
    let e10;
    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;
    let (mut vr, mut vp, mut vm) = if e2 >= 0 {
        // This expression is slightly faster than max(0, log10_pow2(e2) - 1).
        let q = log10_pow2(e2) - u32::from(e2 > 3);
        e10 = q as i32;
        let k = DOUBLE_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
        let i = -e2 + q as i32 + k;
        let (vr, mut vp, vm) =
            mul_shift_all(m2, DOUBLE_POW5_INV_SPLIT[q as usize], i as u32, mm_shift);
        if q <= 21 {
            // This should use q <= 22, but 21 is also safe. Only one of mp,
            // mv and mm can be a multiple of 5, if any.
            if mv % 5 == 0 {
                vr_is_trailing_zeros = multiple_of_power_of_5(mv, q);
            } else if accept_bounds {
                // Same as min(e2 + (~mm & 1), pow5_factor(mm)) >= q, because
                // e2 >= q.
                vm_is_trailing_zeros = multiple_of_power_of_5(mv - 1 - mm_shift, q);
            } else {
                // Same as min(e2 + 1, pow5_factor(mp)) >= q.
                vp -= u64::from(multiple_of_power_of_5(mv + 2, q));
            }
        }
        (vr, vp, vm)
    } else {
        // This expression is slightly faster than max(0, log10_pow5(-e2) - 1).
        let q = log10_pow5(-e2) - u32::from(-e2 > 1);
        e10 = q as i32 + e2;
        let i = -e2 - q as i32;
        let k = pow5bits(i) - DOUBLE_POW5_BITCOUNT;
        let j = q as i32 - k;
        let (vr, mut vp, vm) =
            mul_shift_all(m2, DOUBLE_POW5_SPLIT[i as usize], j as u32, mm_shift);
        if q <= 1 {
            // {vr,vp,vm} has trailing zeros if {mv,mp,mm} has at least q
            // trailing zero bits; mv = 4 m2 always has at least two.
            vr_is_trailing_zeros = true;
            if accept_bounds {
                // mm = mv - 1 - mm_shift has one trailing zero bit iff
                // mm_shift == 1.
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                // mp = mv + 2 always has at least one trailing zero bit.
                vp -= 1;
            }
        } else if q < 63 {
            // vr has trailing zeros iff mv has at least q - 1 trailing zero
            // bits, since -e2 >= q.
            vr_is_trailing_zeros = multiple_of_power_of_2(mv, q - 1);
        }
        (vr, vp, vm)
    };

    // Step 4: find the shortest decimal in the interval.
    let mut removed = 0i32;
    let mut last_removed_digit = 0u8;
    let output = if vm_is_trailing_zeros || vr_is_trailing_zeros {
        // General case, which happens rarely (~0.7%).
        while vp / 10 > vm / 10 {
            vm_is_trailing_zeros &= vm % 10 == 0;
            vr_is_trailing_zeros &= last_removed_digit == 0;
            last_removed_digit = (vr % 10) as u8;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }
        if vm_is_trailing_zeros {
            while vm % 10 == 0 {
                vr_is_trailing_zeros &= last_removed_digit == 0;
                last_removed_digit = (vr % 10) as u8;
                vr /= 10;
                vp /= 10;
                vm /= 10;
                removed += 1;
            }
        }
        if vr_is_trailing_zeros && last_removed_digit == 5 && vr % 2 == 0 {
            // Round even if the exact number is ….50…0.
            last_removed_digit = 4;
        }
        // Take vr + 1 if vr is outside bounds or we need to round up.
        vr + u64::from(
            (vr == vm && (!accept_bounds || !vm_is_trailing_zeros)) || last_removed_digit >= 5,
        )
    } else {
        // Specialized for the common case (~99.3%).
        let mut round_up = false;
        if vp / 100 > vm / 100 {
            // Optimization: remove two digits at a time (~86.2%).
            round_up = vr % 100 >= 50;
            vr /= 100;
            vp /= 100;
            vm /= 100;
            removed += 2;
        }
        while vp / 10 > vm / 10 {
            round_up = vr % 10 >= 5;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }
        vr + u64::from(vr == vm || round_up)
    };

    FloatingDecimal64 {
        mantissa: output,
        exponent: e10 + removed,
    }
}

/// Fast path for exact integers in `[1, 2^53)`: the value converts by
/// shifting alone. The returned mantissa may contain trailing decimal zeros.
pub fn d2d_small_int(ieee_mantissa: u64, ieee_exponent: u32) -> Option<FloatingDecimal64> {
    let m2 = (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa;
    let e2 = ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32;

    if e2 > 0 || e2 < -52 {
        // f >= 2^53, or f < 1 (this also rejects subnormals).
        return None;
    }

    // 2^52 <= m2 < 2^53 and 0 <= -e2 <= 52, so 1 <= f = m2 / 2^-e2 < 2^53.
    // The value is an integer iff the low -e2 bits of the significand are 0.
    let mask = (1u64 << -e2) - 1;
    if m2 & mask != 0 {
        return None;
    }

    Some(FloatingDecimal64 {
        mantissa: m2 >> -e2,
        exponent: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortest(f: f64) -> FloatingDecimal64 {
        assert!(f > 0.0 && f.is_finite());
        let bits = f.to_bits();
        let ieee_mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
        let ieee_exponent = (bits >> DOUBLE_MANTISSA_BITS) as u32;
        d2d(ieee_mantissa, ieee_exponent)
    }

    fn dec(mantissa: u64, exponent: i32) -> FloatingDecimal64 {
        FloatingDecimal64 { mantissa, exponent }
    }

    #[test]
    fn small() {
        assert_eq!(shortest(0.3), dec(3, -1));
        assert_eq!(shortest(0.1234), dec(1234, -4));
        assert_eq!(shortest(123.456), dec(123456, -3));
        assert_eq!(shortest(core::f64::consts::PI), dec(3141592653589793, -15));
        assert_eq!(shortest(core::f64::consts::E), dec(2718281828459045, -15));
    }

    #[test]
    fn extremes() {
        // Smallest subnormal, smallest normal, largest finite.
        assert_eq!(shortest(5e-324), dec(5, -324));
        assert_eq!(shortest(f64::MIN_POSITIVE), dec(22250738585072014, -324));
        assert_eq!(shortest(f64::MAX), dec(17976931348623157, 292));
        // The shortest form of this double collapses to a single digit.
        assert_eq!(shortest(1.0e23), dec(1, 23));
    }

    #[test]
    fn small_int_fast_path() {
        let probe = |f: f64| {
            let bits = f.to_bits();
            d2d_small_int(
                bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1),
                (bits >> DOUBLE_MANTISSA_BITS) as u32,
            )
        };
        assert_eq!(probe(1.0), Some(dec(1, 0)));
        assert_eq!(probe(123456.0), Some(dec(123456, 0)));
        assert_eq!(probe(123000.0), Some(dec(123000, 0)));
        assert_eq!(probe(0.5), None);
        assert_eq!(probe(9007199254740992.0), None); // 2^53
        assert_eq!(probe(5e-324), None);
    }

    #[test]
    fn mantissa_never_reaches_18_digits() {
        for bits in (0u64..(0x7ffu64 << 52)).step_by((1 << 52) + 12345678901) {
            let f = f64::from_bits(bits);
            if f == 0.0 {
                continue;
            }
            let v = shortest(f);
            assert!(v.mantissa < 100_000_000_000_000_000);
        }
    }
}
