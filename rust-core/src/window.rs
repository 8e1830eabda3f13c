//! Window functions applied to the padded waveform before the transform
//!
//! All windows are periodic: coefficients are evaluated over `i / L` for
//! `i = 0..L`, where `L` is the padded (power-of-two) length.

use num_complex::Complex64;
use std::f64::consts::PI;

const TWO_PI: f64 = 2.0 * PI;
const FOUR_PI: f64 = 4.0 * PI;
const SIX_PI: f64 = 6.0 * PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    /// Rectangular window (no windowing): w[i] = 1
    Rectangular,

    /// Triangle window: w[i] = 1 - |2i/L - 1|
    Triangle,

    /// Hamming window: w[i] = 0.54 - 0.46*cos(2πi/L)
    #[default]
    Hamming,

    /// Hanning window: w[i] = (1 - cos(2πi/L)) / 2
    Hanning,

    /// Blackman window: w[i] = 0.42 - 0.5*cos(2πi/L) + 0.08*cos(4πi/L)
    Blackman,

    /// 4-term Blackman-Harris window:
    /// w[i] = 0.35875 - 0.48829*cos(2πi/L) + 0.14128*cos(4πi/L) - 0.01168*cos(6πi/L)
    BlackmanHarris,
}

impl Window {
    /// All window types, in declaration order
    pub const ALL: [Window; 6] = [
        Window::Rectangular,
        Window::Triangle,
        Window::Hamming,
        Window::Hanning,
        Window::Blackman,
        Window::BlackmanHarris,
    ];

    /// Coefficient for sample `index` of a window spanning `length` samples
    pub fn coefficient(&self, index: usize, length: usize) -> f64 {
        let ratio = index as f64 / length as f64;

        match self {
            Window::Rectangular => 1.0,
            Window::Triangle => 1.0 - (2.0 * ratio - 1.0).abs(),
            Window::Hamming => 0.54 - 0.46 * (TWO_PI * ratio).cos(),
            Window::Hanning => (1.0 - (TWO_PI * ratio).cos()) / 2.0,
            Window::Blackman => {
                0.42 - 0.5 * (TWO_PI * ratio).cos() + 0.08 * (FOUR_PI * ratio).cos()
            }
            Window::BlackmanHarris => {
                0.35875 - 0.48829 * (TWO_PI * ratio).cos() + 0.14128 * (FOUR_PI * ratio).cos()
                    - 0.01168 * (SIX_PI * ratio).cos()
            }
        }
    }

    /// Mean coefficient over `length` samples
    ///
    /// Dividing a windowed magnitude by this recovers the amplitude a
    /// rectangular window would report.
    pub fn coherent_gain(&self, length: usize) -> f64 {
        if length == 0 {
            return 1.0;
        }
        let sum: f64 = (0..length).map(|i| self.coefficient(i, length)).sum();
        sum / length as f64
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window` - Type of window function
/// * `length` - Number of samples (L)
///
/// # Returns
/// Vector of window coefficients w[i] for i = 0..L-1
pub fn generate_window(window: Window, length: usize) -> Vec<f64> {
    (0..length).map(|i| window.coefficient(i, length)).collect()
}

/// Multiply `buffer` in place by the selected window
pub fn apply_window(buffer: &mut [Complex64], window: Window) {
    if window == Window::Rectangular {
        return;
    }

    let length = buffer.len();
    for (i, sample) in buffer.iter_mut().enumerate() {
        *sample *= window.coefficient(i, length);
    }
}
