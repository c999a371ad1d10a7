use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tangent_curve::api::Coefficients;

pub fn coeffs_from_py(pairs: Vec<(f64, f64)>) -> PyResult<Coefficients> {
    Coefficients::from_tuples(&pairs).map_err(to_value_err)
}

pub fn to_value_err<E: std::fmt::Display>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}
