//! Closed curves from truncated Fourier series of the radius of curvature.
//!
//! A curve is described by an ordered list of coefficient pairs `(a_k, b_k)`.
//! Its position at tangent angle θ is the closed-form integral
//! `∫₀^θ ρ(t) (cos t, sin t) dt` with
//! `ρ(t) = b_0 + Σ_{k≥2} (a_k sin kt + b_k cos kt)`.
//!
//! Layout
//! - `series`: the coefficient store (typed pairs, strict text parser,
//!   reproducible random series).
//! - `curve`: the analytic evaluator, the angle sampler, and a quadrature
//!   cross-check of the closed forms.
//!
//! API Policy
//! - The crate is consumed by the CLI and the Python bindings in this
//!   repository. Prefer `api` or `prelude` re-exports at call sites.

pub mod api;
pub mod curve;
pub mod series;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::curve::{
        evaluate, evaluate_pairs, integrate_tangent, points_at, radius_of_curvature, sweep,
        AngleSweep, EvalError, QuadCfg, Sweep, SweepCfg, SweepError,
    };
    pub use crate::series::{CoeffPair, Coefficients, ParseError};
    pub use nalgebra::Vector2 as Vec2;
}
