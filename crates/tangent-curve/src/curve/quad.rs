//! Numeric counterpart of the closed forms.
//!
//! `X(θ) = ∫₀^θ ρ(t) cos t dt`, `Y(θ) = ∫₀^θ ρ(t) sin t dt` with
//! `ρ(t) = b_0 + Σ_{k≥2} (a_k sin kt + b_k cos kt)`.

use nalgebra::Vector2;

use crate::series::Coefficients;

/// Composite Simpson settings.
#[derive(Clone, Copy, Debug)]
pub struct QuadCfg {
    /// Number of subintervals; rounded up to an even count of at least 2.
    pub intervals: usize,
}

impl Default for QuadCfg {
    fn default() -> Self {
        Self { intervals: 1024 }
    }
}

/// Radius of curvature as a function of tangent angle `t`.
pub fn radius_of_curvature(t: f64, coeffs: &Coefficients) -> f64 {
    coeffs.harmonics().fold(coeffs.fundamental(), |acc, (k, p)| {
        let kt = k as f64 * t;
        acc + p.a * kt.sin() + p.b * kt.cos()
    })
}

/// Integrate `ρ(t)(cos t, sin t)` over `[0, theta]`.
pub fn integrate_tangent(theta: f64, coeffs: &Coefficients, cfg: QuadCfg) -> Vector2<f64> {
    if theta == 0.0 {
        return Vector2::zeros();
    }
    let n = cfg.intervals.max(2).next_multiple_of(2);
    let h = theta / n as f64;
    let f = |t: f64| {
        let r = radius_of_curvature(t, coeffs);
        Vector2::new(r * t.cos(), r * t.sin())
    };
    let mut acc = f(0.0) + f(theta);
    for i in 1..n {
        let w = if i % 2 == 1 { 4.0 } else { 2.0 };
        acc += f(i as f64 * h) * w;
    }
    acc * (h / 3.0)
}
