//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod transform_bindings;
mod window_bindings;

/// Python module definition
#[pymodule]
fn spectral_fft(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform_bindings::transform, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::transform_f32, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::transform_complex, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::magnitude_spectrum, m)?)?;
    m.add_class::<transform_bindings::PyTransformer>()?;

    // Add Window enum
    m.add_class::<window_bindings::PyWindow>()?;

    Ok(())
}
