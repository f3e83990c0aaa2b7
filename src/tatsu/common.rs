//! Integer approximations of base-2/5/10 logarithms and decimal digit
//! counts, shared by all conversion kernels.

/// Returns `⌈log2(5^e)⌉`, and 1 for `e = 0`.
///
/// The approximation is valid for `0 ≤ e ≤ 3528`; the multiplication
/// overflows beyond that.
#[inline]
pub const fn pow5bits(e: i32) -> i32 {
    debug_assert!(0 <= e && e <= 3528);
    (((e as u32 * 1217359) >> 19) + 1) as i32
}

/// Returns `⌊log10(2^e)⌋`; valid for `0 ≤ e ≤ 1650`.
#[inline]
pub const fn log10_pow2(e: i32) -> u32 {
    debug_assert!(0 <= e && e <= 1650);
    (e as u32 * 78913) >> 18
}

/// Returns `⌊log10(5^e)⌋`; valid for `0 ≤ e ≤ 2620`.
#[inline]
pub const fn log10_pow5(e: i32) -> u32 {
    debug_assert!(0 <= e && e <= 2620);
    (e as u32 * 732923) >> 20
}

/// Number of decimal digits of `v`. Precondition: `v < 10^9`.
#[inline]
pub fn decimal_length9(v: u32) -> u32 {
    debug_assert!(v < 1000000000);
    if v >= 100000000 {
        9
    } else if v >= 10000000 {
        8
    } else if v >= 1000000 {
        7
    } else if v >= 100000 {
        6
    } else if v >= 10000 {
        5
    } else if v >= 1000 {
        4
    } else if v >= 100 {
        3
    } else if v >= 10 {
        2
    } else {
        1
    }
}

/// Number of decimal digits of `v`. Precondition: `v < 10^17`.
///
/// The average shortest output is 16.38 digits, so the ladder checks
/// high-to-low.
#[inline]
pub fn decimal_length17(v: u64) -> u32 {
    debug_assert!(v < 100000000000000000);
    if v >= 10000000000000000 {
        17
    } else if v >= 1000000000000000 {
        16
    } else if v >= 100000000000000 {
        15
    } else if v >= 10000000000000 {
        14
    } else if v >= 1000000000000 {
        13
    } else if v >= 100000000000 {
        12
    } else if v >= 10000000000 {
        11
    } else if v >= 1000000000 {
        10
    } else if v >= 100000000 {
        9
    } else if v >= 10000000 {
        8
    } else if v >= 1000000 {
        7
    } else if v >= 100000 {
        6
    } else if v >= 10000 {
        5
    } else if v >= 1000 {
        4
    } else if v >= 100 {
        3
    } else if v >= 10 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_approximations() {
        for e in 0..=1650 {
            assert_eq!(log10_pow2(e) as f64, (e as f64 * 2f64.log10()).floor());
        }
        for e in 0..=1000 {
            assert_eq!(log10_pow5(e) as f64, (e as f64 * 5f64.log10()).floor());
        }
        for e in 1..=1000 {
            assert_eq!(pow5bits(e) as f64, (e as f64 * 5f64.log2()).ceil());
        }
        assert_eq!(pow5bits(0), 1);
    }

    #[test]
    fn digit_counts() {
        for v in [0u32, 1, 9, 10, 99, 100, 12345, 999999999] {
            assert_eq!(decimal_length9(v) as usize, v.to_string().len());
        }
        for v in [0u64, 1, 9, 10, 1234567890123456, 99999999999999999] {
            assert_eq!(decimal_length17(v) as usize, v.to_string().len());
        }
    }
}
