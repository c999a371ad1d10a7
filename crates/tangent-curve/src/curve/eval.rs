//! Closed-form evaluator.
//!
//! For positions `k = 2..N-1` of the series:
//!
//! ```text
//! X += (a_k/2)[(1−cos((k+1)θ))/(k+1) + (1−cos((k−1)θ))/(k−1)]
//!    + (b_k/2)[sin((k+1)θ)/(k+1) + sin((k−1)θ)/(k−1)]
//! Y += (a_k/2)[−sin((k+1)θ)/(k+1) + sin((k−1)θ)/(k−1)]
//!    + (b_k/2)[(1−cos((k+1)θ))/(k+1) + (cos((k−1)θ)−1)/(k−1)]
//! ```
//!
//! plus the fundamental `b_0 (sin θ, 1 − cos θ)`. Position 1 is never read,
//! so `k − 1 ≥ 1` in every division.
//!
//! The `a` and `b` contributions accumulate in separate sums which are added
//! before the fundamental; keep that order, results are compared bitwise.

use std::fmt;

use nalgebra::Vector2;

use crate::series::{CoeffPair, Coefficients};

/// Evaluator precondition failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// The coefficient list has no entries, so `b_0` does not exist.
    EmptyCoefficients,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EmptyCoefficients => {
                write!(f, "coefficient series is empty (need at least b_0)")
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Curve point at angle `theta` (radians).
#[inline]
pub fn evaluate(theta: f64, coeffs: &Coefficients) -> Vector2<f64> {
    closed_form(theta, coeffs.pairs())
}

/// Slice-level entry point for callers without a `Coefficients` value.
pub fn evaluate_pairs(theta: f64, pairs: &[CoeffPair]) -> Result<Vector2<f64>, EvalError> {
    if pairs.is_empty() {
        return Err(EvalError::EmptyCoefficients);
    }
    Ok(closed_form(theta, pairs))
}

#[inline]
pub fn eval_x(theta: f64, coeffs: &Coefficients) -> f64 {
    x_sum(theta, coeffs.pairs())
}

#[inline]
pub fn eval_y(theta: f64, coeffs: &Coefficients) -> f64 {
    y_sum(theta, coeffs.pairs())
}

#[inline]
fn closed_form(theta: f64, pairs: &[CoeffPair]) -> Vector2<f64> {
    Vector2::new(x_sum(theta, pairs), y_sum(theta, pairs))
}

fn x_sum(theta: f64, pairs: &[CoeffPair]) -> f64 {
    let mut a_sum = 0.0;
    let mut b_sum = 0.0;
    for (k, p) in pairs.iter().enumerate().skip(2) {
        let kp = (k + 1) as f64;
        let km = (k - 1) as f64;
        a_sum += (p.a / 2.0) * ((1.0 - (kp * theta).cos()) / kp + (1.0 - (km * theta).cos()) / km);
        b_sum += (p.b / 2.0) * ((kp * theta).sin() / kp + (km * theta).sin() / km);
    }
    a_sum + b_sum + pairs[0].b * theta.sin()
}

fn y_sum(theta: f64, pairs: &[CoeffPair]) -> f64 {
    let mut a_sum = 0.0;
    let mut b_sum = 0.0;
    for (k, p) in pairs.iter().enumerate().skip(2) {
        let kp = (k + 1) as f64;
        let km = (k - 1) as f64;
        a_sum += (p.a / 2.0) * (-(kp * theta).sin() / kp + (km * theta).sin() / km);
        b_sum += (p.b / 2.0) * ((1.0 - (kp * theta).cos()) / kp + ((km * theta).cos() - 1.0) / km);
    }
    a_sum + b_sum + pairs[0].b * (1.0 - theta.cos())
}
