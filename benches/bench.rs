use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const NUMS: &[f64] = &[0., -69., 123406000., 0.1234, 2.718281828459045, 1.7976931348623157e308];

fn benchmark_id(x: f64) -> BenchmarkId {
    BenchmarkId::from_parameter(ryu::Buffer::new().format(x))
}

fn tatsu_plain(c: &mut Criterion) {
    let mut g = c.benchmark_group("tatsu_plain");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| tatsu::Buffer::new().format_finite(black_box(num)).len());
        });
    }
    g.finish();
}

fn tatsu_sci(c: &mut Criterion) {
    let mut g = c.benchmark_group("tatsu_sci");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| tatsu::Buffer::new().format_sci_finite(black_box(num)).len());
        });
    }
    g.finish();
}

fn tatsu_shortest(c: &mut Criterion) {
    let mut g = c.benchmark_group("tatsu_shortest");

    for num in NUMS {
        let num = num.abs();
        g.bench_with_input(benchmark_id(num), &num, |b, &num| {
            let mut buf = [0u8; 25];
            b.iter(|| tatsu::d2s_buffered_n(black_box(num), &mut buf));
        });
    }
    g.finish();
}

fn tatsu_fixed17(c: &mut Criterion) {
    let mut g = c.benchmark_group("tatsu_fixed17");

    for num in NUMS {
        let num = num.abs();
        g.bench_with_input(benchmark_id(num), &num, |b, &num| {
            let mut buf = [0u8; 512];
            b.iter(|| tatsu::d2fixed_buffered_n(black_box(num), 17, &mut buf));
        });
    }
    g.finish();
}

fn ryu(c: &mut Criterion) {
    let mut g = c.benchmark_group("ryu");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| ryu::Buffer::new().format_finite(black_box(num)).len());
        });
    }
    g.finish();
}

fn std(c: &mut Criterion) {
    let mut g = c.benchmark_group("std");

    use std::io::Write;
    let mut buf = [0u8; 512];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| write!(buf.as_mut_slice(), "{}", black_box(num)));
        });
    }
    g.finish();
}

criterion_group!(microbench, tatsu_plain, tatsu_sci, tatsu_shortest, tatsu_fixed17, ryu, std);

criterion_main!(microbench);
