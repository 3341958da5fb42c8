//! End-to-end MSM throughput across input sizes: pseudorandom inputs,
//! seed fixed, varying `N`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use msm_engine::engine::{Engine, MsmOptions};
use msm_engine::params::CurveParams;

fn bench_msm(c: &mut Criterion) {
    let params = CurveParams::test_curve();
    let mut engine = Engine::create(params);
    engine.start_threads(num_cpus_guess()).unwrap();

    let mut group = c.benchmark_group("msm");
    for &n in &[1usize << 12, 1 << 14, 1 << 16] {
        let scalars = engine.random_scalars(n, 0x51ed_0000 ^ n as u64);
        let points = engine.random_points_fast(n, 0x51ed_1111 ^ n as u64);

        group.throughput(criterion::Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| engine.msm(&scalars, &points, n, MsmOptions::default()).unwrap());
        });
    }
    group.finish();
}

/// `rayon`'s own default already probes the host; this just needs a
/// plausible worker count for the pool under benchmark, not the real one.
fn num_cpus_guess() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(4)
}

criterion_group!(benches, bench_msm);
criterion_main!(benches);
