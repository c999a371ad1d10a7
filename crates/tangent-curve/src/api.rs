//! Curated surface for the CLI and the bindings.
//!
//! Breaking changes are allowed; the re-exports only keep call sites short.

// Coefficient store
pub use crate::series::rand::{draw_series, GeneratorError, ReplayToken, SeriesCfg};
pub use crate::series::{CoeffPair, Coefficients, ParseError};
// Evaluator and sampler
pub use crate::curve::{
    eval_x, eval_y, evaluate, evaluate_pairs, integrate_tangent, points_at, radius_of_curvature,
    sweep, AngleSweep, EvalError, QuadCfg, Sweep, SweepCfg, SweepError,
};
