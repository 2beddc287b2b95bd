//! Micro-benchmarks for the hot kernel paths.

use bigrat::{Natural, Rational};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A deterministic pseudo-random value with roughly `bits` bits.
fn sample(bits: u32, seed: u64) -> Natural {
    let mut state = seed | 1;
    let mut res = Natural::ZERO;
    for _ in 0..bits.div_ceil(64) {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        res = (res << 64) + Natural::from(state);
    }
    res
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for bits in [256u32, 1024, 4096] {
        let a = sample(bits, 1);
        let b = sample(bits, 2);
        group.bench_function(format!("{bits}x{bits}"), |bench| {
            bench.iter(|| black_box(&a) * black_box(&b))
        });
    }
    group.finish();
}

fn bench_div_rem(c: &mut Criterion) {
    let mut group = c.benchmark_group("div_rem");
    for (n, d) in [(1024u32, 256u32), (4096, 1024)] {
        let a = sample(n, 3);
        let b = sample(d, 4);
        group.bench_function(format!("{n}/{d}"), |bench| {
            bench.iter(|| black_box(&a).div_rem(black_box(&b)).unwrap())
        });
    }
    group.finish();
}

fn bench_gcd(c: &mut Criterion) {
    let a = sample(1024, 5);
    let b = sample(1024, 6);
    c.bench_function("gcd/1024", |bench| {
        bench.iter(|| black_box(&a).gcd(black_box(&b)))
    });
}

fn bench_rational_mul(c: &mut Criterion) {
    let a = Rational::new(1313, 39).unwrap();
    let big = Rational::try_from(core::f64::consts::PI).unwrap();
    c.bench_function("rational_mul", |bench| {
        bench.iter(|| black_box(&a) * black_box(&big))
    });
}

fn bench_parse_and_format(c: &mut Criterion) {
    let a = sample(2048, 7);
    let s = a.to_string();
    c.bench_function("format/2048", |bench| {
        bench.iter(|| black_box(&a).to_string())
    });
    c.bench_function("parse/2048", |bench| {
        bench.iter(|| black_box(s.as_str()).parse::<Natural>().unwrap())
    });
}

criterion_group!(
    benches,
    bench_mul,
    bench_div_rem,
    bench_gcd,
    bench_rational_mul,
    bench_parse_and_format
);
criterion_main!(benches);
