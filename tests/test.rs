#![allow(clippy::unreadable_literal)]

use rand::rngs::SmallRng;
use rand::{RngCore as _, SeedableRng as _};

const N: usize = if cfg!(miri) { 500 } else { 1_000_000 };

fn plain(value: f64) -> String {
    tatsu::Buffer::new().format(value).to_owned()
}

fn sci(value: f64) -> String {
    tatsu::Buffer::new().format_sci(value).to_owned()
}

fn fixed(value: f64) -> String {
    tatsu::Buffer::new().format_fixed(value).to_owned()
}

#[test]
fn zero() {
    assert_eq!(plain(0.0), "0");
    assert_eq!(plain(-0.0), "-0");
    assert_eq!(sci(0.0), "0e+00");
    assert_eq!(sci(-0.0), "-0e+00");
    assert_eq!(fixed(0.0), "0");
}

#[test]
fn specials() {
    assert_eq!(plain(f64::NAN), "NaN");
    assert_eq!(plain(-f64::NAN), "NaN");
    assert_eq!(plain(f64::INFINITY), "inf");
    assert_eq!(plain(f64::NEG_INFINITY), "-inf");
    assert_eq!(sci(f64::INFINITY), "inf");
    assert_eq!(fixed(f64::NEG_INFINITY), "-inf");
}

#[test]
fn signs() {
    assert_eq!(plain(-1.729), "-1.729");
    assert_eq!(sci(-1.729), "-1.729e+00");
    assert_eq!(fixed(-17290.0), "-17290");
}

#[test]
fn notable_values() {
    assert_eq!(plain(1e23), "1e+23");
    assert_eq!(fixed(1e23), "99999999999999991611392");
    assert_eq!(sci(0.1), "1e-01");
    assert_eq!(plain(5e-324), "5e-324");
    assert_eq!(plain(1.7976931348623157e308), "1.7976931348623157e+308");
    assert_eq!(plain(6.62607015e-34), "6.62607015e-34");
}

#[test]
fn shortest_buffered() {
    let mut buf = [0u8; 25];
    let n = tatsu::d2s_buffered_n(1.729e20, &mut buf);
    assert_eq!(&buf[..n], b"1.729E20");
}

#[test]
fn precision_buffered() {
    let mut buf = [0u8; 512];
    let n = tatsu::d2fixed_buffered_n(0.1, 20, &mut buf);
    assert_eq!(&buf[..n], b"0.10000000000000000555");
    let n = tatsu::d2exp_buffered_n(0.1, 17, &mut buf);
    assert_eq!(&buf[..n], b"1.00000000000000006e-01");
}

#[test]
fn to_chars_capacity() {
    let mut buf = [0u8; 4];
    assert_eq!(
        tatsu::to_chars(&mut buf, 17.29, tatsu::FloatFormat::Plain),
        Err(tatsu::ValueTooLarge)
    );
    let mut buf = [0u8; 5];
    let n = tatsu::to_chars(&mut buf, 17.29, tatsu::FloatFormat::Plain).unwrap();
    assert_eq!(&buf[..n], b"17.29");
}

#[test]
fn roundtrip() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut fail = 0;
    for _ in 0..N {
        let float = f64::from_bits(rng.next_u64());
        if !float.is_finite() {
            continue;
        }
        let printed = plain(float);
        let matches = printed
            .parse::<f64>()
            .is_ok_and(|roundtrip| roundtrip == float);
        if !matches {
            eprintln!("{float:?} PRINTED={printed}");
            fail += 1;
        }
    }
    assert!(fail == 0, "{fail} mismatches");
}

#[test]
fn roundtrip_shortest_uppercase() {
    let mut rng = SmallRng::seed_from_u64(0xd2f);
    let mut buf = [0u8; 25];
    for _ in 0..N / 4 {
        let float = f64::from_bits(rng.next_u64() & !(1u64 << 63));
        if !float.is_finite() {
            continue;
        }
        let n = tatsu::d2s_buffered_n(float, &mut buf);
        let s = std::str::from_utf8(&buf[..n]).unwrap();
        assert_eq!(s.parse::<f64>().unwrap(), float, "{s}");
    }
}
