//! Spectral FFT - windowed, normalized magnitude spectra
//! 
//! Radix-2 Cooley-Tukey transform of real or complex waveforms with window
//! functions, Nyquist truncation and an adaptive low-pass filter. Python
//! bindings are available behind the `python` feature.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod fft;
pub mod input;
pub mod spectrum;
pub mod transform;
pub mod window;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use fft::TransformError;
pub use input::Sample;
pub use spectrum::LowPassFilter;
pub use transform::{transform, transform_samples, TransformConfig, Transformer};
pub use window::Window;
