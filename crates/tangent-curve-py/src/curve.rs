//! Evaluator, sampler and parser bindings.

use crate::common::{coeffs_from_py, to_value_err};
use pyo3::prelude::*;
use tangent_curve::api::{evaluate, sweep, Coefficients, SweepCfg};

/// Curve point `(x, y)` at angle `theta`.
#[pyfunction]
pub fn evaluate_point(theta: f64, pairs: Vec<(f64, f64)>) -> PyResult<(f64, f64)> {
    let coeffs = coeffs_from_py(pairs)?;
    let p = evaluate(theta, &coeffs);
    Ok((p.x, p.y))
}

/// Sample one period; returns `(theta, x, y)` lists.
#[pyfunction]
#[pyo3(signature = (pairs, step = None, include_end = true))]
pub fn sweep_curve(
    pairs: Vec<(f64, f64)>,
    step: Option<f64>,
    include_end: bool,
) -> PyResult<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    let coeffs = coeffs_from_py(pairs)?;
    let mut cfg = SweepCfg::default();
    if let Some(step) = step {
        cfg.step = step;
    }
    cfg.include_end = include_end;
    let s = sweep(&coeffs, &cfg).map_err(to_value_err)?;
    Ok((s.theta, s.x, s.y))
}

/// Parse `a,b~a,b` text into a list of pairs.
#[pyfunction]
pub fn parse_coefficients(text: &str) -> PyResult<Vec<(f64, f64)>> {
    let coeffs: Coefficients = text.parse().map_err(to_value_err)?;
    Ok(coeffs.pairs().iter().map(|p| (p.a, p.b)).collect())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(evaluate_point, m)?)?;
    m.add_function(wrap_pyfunction!(sweep_curve, m)?)?;
    m.add_function(wrap_pyfunction!(parse_coefficients, m)?)?;
    Ok(())
}
