//! Closed form vs. Simpson quadrature on a random series.
//!
//! Prints the largest deviation over the default sweep for a few quadrature
//! resolutions, plus timings for both paths.

use std::time::Instant;

use tangent_curve::api::{
    draw_series, evaluate, integrate_tangent, QuadCfg, ReplayToken, SeriesCfg, SweepCfg,
};

fn main() {
    let cfg = SeriesCfg {
        harmonics: 12,
        ..SeriesCfg::default()
    };
    let coeffs = draw_series(cfg, ReplayToken { seed: 1, index: 0 }).expect("valid series cfg");
    let angles: Vec<f64> = SweepCfg::default()
        .angles()
        .expect("default sweep")
        .collect();

    let t0 = Instant::now();
    let analytic: Vec<_> = angles.iter().map(|&th| evaluate(th, &coeffs)).collect();
    let analytic_ms = t0.elapsed().as_secs_f64() * 1e3;
    println!("samples={} analytic_time_ms={analytic_ms:.3}", angles.len());

    for intervals in [64, 256, 1024, 4096] {
        let q = QuadCfg { intervals };
        let t1 = Instant::now();
        let max_dev = angles
            .iter()
            .zip(&analytic)
            .map(|(&th, p)| (integrate_tangent(th, &coeffs, q) - p).norm())
            .fold(0.0, f64::max);
        let quad_ms = t1.elapsed().as_secs_f64() * 1e3;
        println!("intervals={intervals} max_dev={max_dev:.3e} quad_time_ms={quad_ms:.3}");
    }
}
