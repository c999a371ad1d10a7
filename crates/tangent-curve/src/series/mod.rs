//! Coefficient store: ordered, immutable, non-empty lists of `(a_k, b_k)`.
//!
//! Conventions
//! - Position 0 carries the fundamental: only `b_0` is read by the evaluator.
//! - Position 1 is stored but never read by the evaluator.
//! - Positions `k ≥ 2` are full harmonic terms.
//!
//! Text format
//! - One logical line, pairs separated by `~`, each pair `a,b`
//!   (e.g. `0,1~0,0~0.5,0.3`). Parsing is strict and fails fast with a
//!   `ParseError` naming the offending pair.
//!
//! Code cross-refs: `curve::evaluate`, `rand::draw_series`.

mod parse;
pub mod rand;
mod types;

pub use parse::ParseError;
pub use types::{CoeffPair, Coefficients};
