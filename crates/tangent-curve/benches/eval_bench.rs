//! Criterion benchmarks for the closed-form evaluator and the default sweep.
//! Focus sizes: highest harmonic in {2, 8, 16, 32}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use tangent_curve::api::{draw_series, evaluate, sweep, ReplayToken, SeriesCfg, SweepCfg};

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve");
    for &h in &[2usize, 8, 16, 32] {
        let cfg = SeriesCfg {
            harmonics: h,
            ..SeriesCfg::default()
        };
        let coeffs = draw_series(cfg, ReplayToken { seed: 43, index: 0 }).unwrap();

        group.bench_with_input(BenchmarkId::new("evaluate", h), &coeffs, |b, coeffs| {
            let mut theta = 0.0;
            b.iter(|| {
                theta += 0.01;
                evaluate(theta, coeffs)
            })
        });

        group.bench_with_input(BenchmarkId::new("sweep_default", h), &coeffs, |b, coeffs| {
            b.iter_batched(
                SweepCfg::default,
                |cfg| {
                    let _s = sweep(coeffs, &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
