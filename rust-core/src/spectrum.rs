//! Spectrum post-processing: Nyquist truncation, normalization and the
//! adaptive low-pass filter

use num_complex::Complex64;

/// Adaptive magnitude threshold filter
///
/// Bins whose magnitude is strictly below `threshold * max_magnitude` are
/// zeroed. The ratio is expected in [0, 1] but is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LowPassFilter {
    /// Whether the filter runs at all
    pub enabled: bool,

    /// Fraction of the peak magnitude below which bins are zeroed
    pub threshold: f64,
}

impl LowPassFilter {
    /// Enabled filter with the given threshold ratio
    pub fn new(threshold: f64) -> Self {
        Self {
            enabled: true,
            threshold,
        }
    }

    /// Filter that leaves every bin untouched
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Truncate a full spectrum to its first half and scale it by `2 / L`
///
/// # Returns
/// The normalized bins `0..L/2` as a subslice of `spectrum`
pub fn normalize_half_spectrum(spectrum: &mut [Complex64]) -> &mut [Complex64] {
    let len = spectrum.len();
    let nyquist = len / 2;
    let normalization = 2.0 / len as f64;

    let half = &mut spectrum[..nyquist];
    for bin in half.iter_mut() {
        *bin *= normalization;
    }
    half
}

/// Zero every bin whose magnitude falls below the adaptive threshold
///
/// # Returns
/// Number of bins zeroed
pub fn apply_low_pass_filter(bins: &mut [Complex64], filter: LowPassFilter) -> usize {
    if !filter.enabled || bins.is_empty() {
        return 0;
    }

    let max = bins.iter().map(|c| c.norm()).fold(f64::MIN, f64::max);
    let threshold = max * filter.threshold;

    let mut zeroed = 0;
    for bin in bins.iter_mut() {
        if bin.norm() < threshold {
            *bin = Complex64::new(0.0, 0.0);
            zeroed += 1;
        }
    }

    if zeroed > 0 {
        log::debug!(
            "low-pass filter zeroed {} of {} bins (threshold {:.6e})",
            zeroed,
            bins.len(),
            threshold
        );
    }

    zeroed
}

/// Magnitude |X[k]| of each bin
pub fn magnitudes(bins: &[Complex64]) -> Vec<f64> {
    bins.iter().map(|c| c.norm()).collect()
}

/// Magnitude of each bin in dB: 20*log10(|X[k]| / reference)
pub fn magnitudes_db(bins: &[Complex64], reference: f64) -> Vec<f64> {
    bins.iter()
        .map(|c| {
            let mag_clamped = c.norm().max(1e-10); // Avoid log(0)
            20.0 * (mag_clamped / reference).log10()
        })
        .collect()
}

/// Centre frequency in Hz of `bin` for a transform of `fft_len` samples
pub fn bin_frequency_hz(bin: usize, fft_len: usize, sample_rate: f64) -> f64 {
    bin as f64 * sample_rate / fft_len as f64
}
