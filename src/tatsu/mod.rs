//! The conversion engine: integer primitives, multiplier tables, the
//! shortest-round-trip kernel, the precision kernels, and the format
//! dispatcher.

pub mod common;
pub mod digits;
pub mod fixed;
pub mod intrinsics;
pub mod lut;
pub mod shortest;
pub mod to_chars;

use self::common::decimal_length17;
use self::digits::{write_exponent_shortest, write_mantissa};
use self::shortest::{d2d, d2d_small_int, DOUBLE_MANTISSA_BITS};

pub use self::fixed::{d2exp_buffered_n, d2fixed_buffered_n};
pub use self::to_chars::to_chars;

/// Writes the shortest round-tripping decimal form of `f` as
/// `digits[.digits]E[-]exp` (`"1.729E20"`, `"0E0"`, `"1.2E-7"`) and returns
/// the byte count, at most 24. `f` must be finite and nonnegative, and the
/// buffer must hold at least 25 bytes.
pub fn d2s_buffered_n(f: f64, result: &mut [u8]) -> usize {
    let bits = f.to_bits();
    if bits == 0 {
        result[..3].copy_from_slice(b"0E0");
        return 3;
    }

    let ieee_mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
    let ieee_exponent = (bits >> DOUBLE_MANTISSA_BITS) as u32;
    let v = match d2d_small_int(ieee_mantissa, ieee_exponent) {
        Some(mut v) => {
            // The fast path can leave trailing decimal zeros; scientific
            // notation wants them in the exponent instead.
            while v.mantissa % 10 == 0 {
                v.mantissa /= 10;
                v.exponent += 1;
            }
            v
        }
        None => d2d(ieee_mantissa, ieee_exponent),
    };

    let olength = decimal_length17(v.mantissa) as usize;
    write_mantissa(v.mantissa, olength, &mut result[1..olength + 1]);
    result[0] = result[1];
    let mut index = 1;
    if olength > 1 {
        result[1] = b'.';
        index = olength + 1;
    }
    let exp = v.exponent + olength as i32 - 1;
    index + write_exponent_shortest(exp, &mut result[index..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d2s(f: f64) -> String {
        let mut buf = [0u8; 25];
        let n = d2s_buffered_n(f, &mut buf);
        assert!(n <= 24);
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn shortest_strings() {
        assert_eq!(d2s(0.0), "0E0");
        assert_eq!(d2s(1.0), "1E0");
        assert_eq!(d2s(0.3), "3E-1");
        assert_eq!(d2s(1e23), "1E23");
        assert_eq!(d2s(1.729e20), "1.729E20");
        assert_eq!(d2s(1.2e-7), "1.2E-7");
        assert_eq!(d2s(123000123000.0), "1.23000123E11");
        assert_eq!(d2s(2.2250738585072014e-308), "2.2250738585072014E-308");
        assert_eq!(d2s(5e-324), "5E-324");
        assert_eq!(d2s(1.7976931348623157e308), "1.7976931348623157E308");
    }

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100_000))]

        #[test]
        fn round_trip(bits in 0u64..(0x7ffu64 << 52)) {
            let f = f64::from_bits(bits);
            let mut buf = [0u8; 25];
            let n = d2s_buffered_n(f, &mut buf);
            prop_assert!(n <= 24);
            let s = core::str::from_utf8(&buf[..n]).unwrap();
            prop_assert_eq!(s.parse::<f64>().unwrap(), f);
        }
    }
}
