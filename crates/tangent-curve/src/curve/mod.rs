//! Curve evaluation and sampling.
//!
//! Purpose
//! - `eval`: closed-form position `(X(θ), Y(θ))` for a coefficient series.
//!   Pure, stateless, reentrant.
//! - `sweep`: uniform angle grids over one period and the parallel
//!   `theta/x/y` sequences a renderer consumes.
//! - `quad`: composite Simpson integration of `ρ(t)(cos t, sin t)`, used to
//!   cross-check the closed forms.
//!
//! Code cross-refs: `series::Coefficients`.

mod eval;
mod quad;
mod sweep;

pub use eval::{eval_x, eval_y, evaluate, evaluate_pairs, EvalError};
pub use quad::{integrate_tangent, radius_of_curvature, QuadCfg};
pub use sweep::{points_at, sweep, AngleSweep, Sweep, SweepCfg, SweepError};

#[cfg(test)]
mod tests_props;
