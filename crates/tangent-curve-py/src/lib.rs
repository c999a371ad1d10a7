//! PyO3 bindings for the `tangent-curve` evaluator.
//!
//! Notes
//! - Keep bindings thin: coefficient lists cross the boundary as
//!   `[(a, b), ...]` and sweeps come back as parallel lists.

use pyo3::prelude::*;

mod common;
mod curve;

#[pymodule]
fn tangent_curve_native(_py: Python, m: &PyModule) -> PyResult<()> {
    curve::register(m)?;
    Ok(())
}
