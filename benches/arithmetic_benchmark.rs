// ============================================================================
// Arithmetic Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Fast Path - Small operands resolved by checked native arithmetic
// 2. Block Path - Operand sizes that force the block-wise algorithms
// 3. Division - Long division across dividend sizes
// 4. Exponentiation & Roots - pow, modPow and Newton square root
//
// Operand Notes:
// - 18 digits is the largest size still inside one 64-bit block
// - 19+ digits exercises carry/borrow propagation between blocks
// ============================================================================

use bigint_engine::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic pseudo-random digit string of the requested length.
fn digits(len: usize) -> String {
    let pattern = b"1428571428973513579";
    let mut out = String::with_capacity(len);
    out.push('9');
    for i in 1..len {
        out.push(pattern[i % pattern.len()] as char);
    }
    out
}

// ============================================================================
// Fast Path Benchmarks
// ============================================================================

fn benchmark_fast_path(c: &mut Criterion) {
    let engine = create_native_engine();
    let mut group = c.benchmark_group("fast_path");

    group.bench_function("add_small", |b| {
        b.iter(|| black_box(engine.add(black_box("123456789"), black_box("987654321"))));
    });

    group.bench_function("mul_small", |b| {
        b.iter(|| black_box(engine.mul(black_box("123456789"), black_box("987654321"))));
    });

    group.bench_function("div_qr_small", |b| {
        b.iter(|| black_box(engine.div_qr(black_box("987654321"), black_box("12345"))));
    });

    group.finish();
}

// ============================================================================
// Block Path Benchmarks
// ============================================================================

fn benchmark_block_add(c: &mut Criterion) {
    let engine = create_native_engine();
    let mut group = c.benchmark_group("block_add");

    for num_digits in [18, 64, 256, 1024].iter() {
        let a = digits(*num_digits);
        let b = digits(*num_digits);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_digits),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(engine.add(a.as_str(), b.as_str())));
            },
        );
    }

    group.finish();
}

fn benchmark_block_mul(c: &mut Criterion) {
    let engine = create_native_engine();
    let mut group = c.benchmark_group("block_mul");

    for num_digits in [18, 64, 256].iter() {
        let a = digits(*num_digits);
        let b = digits(*num_digits);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_digits),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(engine.mul(a.as_str(), b.as_str())));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Division Benchmarks
// ============================================================================

fn benchmark_long_division(c: &mut Criterion) {
    let engine = create_native_engine();
    let mut group = c.benchmark_group("long_division");

    for num_digits in [32, 128, 512].iter() {
        let dividend = digits(*num_digits);
        let divisor = digits(num_digits / 2);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_digits),
            &(&dividend, &divisor),
            |bench, (dividend, divisor)| {
                bench.iter(|| black_box(engine.div_qr(dividend.as_str(), divisor.as_str())));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Exponentiation & Roots Benchmarks
// ============================================================================

fn benchmark_pow(c: &mut Criterion) {
    let engine = create_native_engine();
    let mut group = c.benchmark_group("pow");

    for exponent in [64i64, 256, 1024].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(exponent),
            exponent,
            |bench, &exponent| {
                bench.iter(|| black_box(engine.pow(black_box("3"), exponent)));
            },
        );
    }

    group.finish();
}

fn benchmark_mod_pow(c: &mut Criterion) {
    let engine = create_native_engine();

    c.bench_function("mod_pow_2048_bit_style", |b| {
        let base = digits(60);
        let exponent = digits(20);
        let modulus = digits(60);

        b.iter(|| black_box(engine.mod_pow(&base, &exponent, &modulus)));
    });
}

fn benchmark_sqrt(c: &mut Criterion) {
    let engine = create_native_engine();
    let mut group = c.benchmark_group("sqrt");

    for num_digits in [20, 80, 200].iter() {
        let n = digits(*num_digits);

        group.bench_with_input(BenchmarkId::from_parameter(num_digits), &n, |bench, n| {
            bench.iter(|| black_box(engine.sqrt(n)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fast_path,
    benchmark_block_add,
    benchmark_block_mul,
    benchmark_long_division,
    benchmark_pow,
    benchmark_mod_pow,
    benchmark_sqrt,
);
criterion_main!(benches);
