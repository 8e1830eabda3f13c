//! Python bindings for the spectrum transform

use pyo3::prelude::*;
use numpy::{Element, PyArray1, PyReadonlyArray1};
use num_complex::Complex64;
use crate::input::Sample;
use crate::spectrum::{magnitudes, LowPassFilter};
use crate::transform::{TransformConfig, Transformer};
use super::window_bindings::PyWindow;

fn build_config(window: PyWindow, enable_low_pass_filter: bool, threshold: f64) -> TransformConfig {
    TransformConfig {
        window: window.into(),
        low_pass: LowPassFilter {
            enabled: enable_low_pass_filter,
            threshold,
        },
    }
}

fn transform_array<'py, S: Sample + Element>(
    py: Python<'py>,
    signal: Option<PyReadonlyArray1<'_, S>>,
    config: TransformConfig,
) -> PyResult<Option<&'py PyArray1<Complex64>>> {
    let samples = match &signal {
        Some(array) => Some(array.as_slice()?),
        None => None,
    };

    let spectrum = Transformer::new(config).process_optional(samples);
    Ok(spectrum.map(|s| PyArray1::from_vec(py, s)))
}

/// Fast Fourier Transform of a float64 waveform
/// 
/// Args:
///     signal: Input waveform (any length; zero-padded to a power of 2), or None
///     window: Window function
///     enable_low_pass_filter: Zero bins below `threshold` times the peak magnitude
///     threshold: Low-pass filter threshold, in [0, 1]
/// 
/// Returns:
///     complex128 array of length next_pow2(len(signal)) / 2, or None for None input
#[pyfunction]
#[pyo3(signature = (signal, window=PyWindow::Hamming, enable_low_pass_filter=false, threshold=0.0))]
pub fn transform<'py>(
    py: Python<'py>,
    signal: Option<PyReadonlyArray1<f64>>,
    window: PyWindow,
    enable_low_pass_filter: bool,
    threshold: f64,
) -> PyResult<Option<&'py PyArray1<Complex64>>> {
    transform_array(py, signal, build_config(window, enable_low_pass_filter, threshold))
}

/// Fast Fourier Transform of a float32 waveform
/// 
/// Same contract as `transform`; samples are widened to float64.
#[pyfunction]
#[pyo3(signature = (signal, window=PyWindow::Hamming, enable_low_pass_filter=false, threshold=0.0))]
pub fn transform_f32<'py>(
    py: Python<'py>,
    signal: Option<PyReadonlyArray1<f32>>,
    window: PyWindow,
    enable_low_pass_filter: bool,
    threshold: f64,
) -> PyResult<Option<&'py PyArray1<Complex64>>> {
    transform_array(py, signal, build_config(window, enable_low_pass_filter, threshold))
}

/// Fast Fourier Transform of a complex128 waveform
/// 
/// Same contract as `transform`.
#[pyfunction]
#[pyo3(signature = (signal, window=PyWindow::Hamming, enable_low_pass_filter=false, threshold=0.0))]
pub fn transform_complex<'py>(
    py: Python<'py>,
    signal: Option<PyReadonlyArray1<Complex64>>,
    window: PyWindow,
    enable_low_pass_filter: bool,
    threshold: f64,
) -> PyResult<Option<&'py PyArray1<Complex64>>> {
    transform_array(py, signal, build_config(window, enable_low_pass_filter, threshold))
}

/// Magnitude |X[k]| of each bin of a spectrum
#[pyfunction]
pub fn magnitude_spectrum<'py>(
    py: Python<'py>,
    spectrum: PyReadonlyArray1<Complex64>,
) -> PyResult<&'py PyArray1<f64>> {
    Ok(PyArray1::from_vec(py, magnitudes(spectrum.as_slice()?)))
}

/// Reusable transformer exposed to Python
#[pyclass(name = "Transformer")]
pub struct PyTransformer {
    transformer: Transformer,
}

#[pymethods]
impl PyTransformer {
    /// Create a new transformer
    /// 
    /// Args:
    ///     window: Window function
    ///     enable_low_pass_filter: Whether to apply the adaptive low-pass filter
    ///     threshold: Low-pass filter threshold, in [0, 1]
    #[new]
    #[pyo3(signature = (window=PyWindow::Hamming, enable_low_pass_filter=false, threshold=0.0))]
    fn new(window: PyWindow, enable_low_pass_filter: bool, threshold: f64) -> Self {
        Self {
            transformer: Transformer::new(build_config(window, enable_low_pass_filter, threshold)),
        }
    }

    /// Transform a float64 waveform
    /// 
    /// Returns:
    ///     complex128 half-spectrum as numpy array
    fn process<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let spectrum = self.transformer.process(signal.as_slice()?);
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Number of output bins for an input of `input_len` samples
    #[staticmethod]
    fn output_len(input_len: usize) -> usize {
        Transformer::output_len(input_len)
    }
}
