//! Kernel-level microbenchmarks: the FMA and integer-fallback Montgomery
//! multiply paths, plus field inversion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use msm_engine::field::inverse::inverse;
use msm_engine::field::limb51::{mul_fallback, mul_fma};
use msm_engine::field::Fe;
use msm_engine::params::CurveParams;

fn bench_mul(c: &mut Criterion) {
    let params = CurveParams::test_curve();
    let mp = params.montgomery_params();
    let x = params.generator_x_mont;
    let y = params.generator_y_mont;

    let mut group = c.benchmark_group("field_mul");
    group.bench_function("fma", |b| b.iter(|| mul_fma(&mp, black_box(&x), black_box(&y))));
    group.bench_function("fallback", |b| b.iter(|| mul_fallback(&mp, black_box(&x), black_box(&y))));
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let params = CurveParams::test_curve();
    let x = Fe::from_limbs(params.generator_x_mont, params.clone());

    c.bench_function("field_inverse", |b| b.iter(|| inverse(black_box(&x))));
}

criterion_group!(benches, bench_mul, bench_inverse);
criterion_main!(benches);
