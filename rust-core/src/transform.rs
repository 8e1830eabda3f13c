//! Windowed, normalized FFT pipeline
//!
//! pad -> window -> FFT -> truncate to Nyquist + normalize -> low-pass -> copy out

use crate::fft::{fft_with_scratch, FftScratch};
use crate::input::{fill_padded, next_power_of_two, Sample};
use crate::spectrum::{apply_low_pass_filter, normalize_half_spectrum, LowPassFilter};
use crate::window::{apply_window, Window};
use num_complex::Complex64;

/// Transform configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformConfig {
    /// Window applied to the padded waveform
    pub window: Window,

    /// Adaptive low-pass filter on the normalized half-spectrum
    pub low_pass: LowPassFilter,
}

impl TransformConfig {
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    /// Enable the low-pass filter with the given threshold ratio
    pub fn with_low_pass_filter(mut self, threshold: f64) -> Self {
        self.low_pass = LowPassFilter::new(threshold);
        self
    }
}

/// Reusable spectrum transformer
///
/// Holds the scratch buffers for one transform at a time. Every buffer is
/// refilled on each call and cleared before the result is returned, so
/// nothing from a previous waveform is visible in the next result. Capacity
/// is kept for reuse. Use one instance per thread.
#[derive(Debug, Default)]
pub struct Transformer {
    config: TransformConfig,
    waveform: Vec<Complex64>,
    scratch: FftScratch,
}

impl Transformer {
    /// Create a transformer with the given configuration
    pub fn new(config: TransformConfig) -> Self {
        Self {
            config,
            waveform: Vec::new(),
            scratch: FftScratch::new(),
        }
    }

    /// Transform `samples` into its normalized half-spectrum
    ///
    /// # Returns
    /// `next_power_of_two(samples.len()) / 2` bins; empty for empty or
    /// single-sample input
    pub fn process<S: Sample>(&mut self, samples: &[S]) -> Vec<Complex64> {
        if samples.is_empty() {
            log::debug!("empty waveform, returning empty spectrum");
            return Vec::new();
        }

        log::trace!(
            "transforming {} samples (padded to {}) with {:?} window",
            samples.len(),
            next_power_of_two(samples.len()),
            self.config.window
        );

        fill_padded(samples, &mut self.waveform);
        apply_window(&mut self.waveform, self.config.window);

        let spectrum = fft_with_scratch(&self.waveform, &mut self.scratch);
        let half = normalize_half_spectrum(spectrum);
        apply_low_pass_filter(half, self.config.low_pass);

        let result = half.to_vec();
        self.waveform.clear();
        self.scratch.clear();
        result
    }

    /// Transform an optional waveform, mapping an absent input to an absent result
    pub fn process_optional<S: Sample>(&mut self, samples: Option<&[S]>) -> Option<Vec<Complex64>> {
        match samples {
            Some(samples) => Some(self.process(samples)),
            None => {
                log::debug!("absent waveform, returning absent spectrum");
                None
            }
        }
    }

    /// Number of output bins for an input of `input_len` samples
    pub fn output_len(input_len: usize) -> usize {
        if input_len == 0 {
            0
        } else {
            next_power_of_two(input_len) / 2
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Update configuration
    pub fn set_config(&mut self, config: TransformConfig) {
        self.config = config;
    }
}

/// Transform a waveform that may be absent
///
/// * `None` yields `None`
/// * an empty slice yields `Some(vec![])`
/// * otherwise yields `next_power_of_two(len) / 2` normalized bins
pub fn transform<S: Sample>(
    samples: Option<&[S]>,
    config: &TransformConfig,
) -> Option<Vec<Complex64>> {
    Transformer::new(*config).process_optional(samples)
}

/// Transform a waveform into its normalized half-spectrum
pub fn transform_samples<S: Sample>(samples: &[S], config: &TransformConfig) -> Vec<Complex64> {
    Transformer::new(*config).process(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use std::f64::consts::PI;

    fn rectangular() -> TransformConfig {
        TransformConfig::default().with_window(Window::Rectangular)
    }

    fn peak_bin(spectrum: &[Complex64]) -> (usize, f64) {
        spectrum
            .iter()
            .map(|c| c.norm())
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = TransformConfig::default();
        assert_eq!(config.window, Window::Hamming);
        assert!(!config.low_pass.enabled);
        assert_eq!(config.low_pass.threshold, 0.0);
    }

    #[test]
    fn test_absent_and_empty_are_distinct() {
        let config = TransformConfig::default();

        assert_eq!(transform::<f32>(None, &config), None);
        assert_eq!(transform::<f32>(Some(&[]), &config), Some(vec![]));
        assert_eq!(transform::<Complex64>(Some(&[]), &config), Some(vec![]));
    }

    #[test]
    fn test_output_length() {
        let config = TransformConfig::default();

        for n in [1usize, 2, 3, 4, 5, 100, 1000, 1024, 1025] {
            let samples = vec![0.5f64; n];
            let spectrum = transform_samples(&samples, &config);
            assert_eq!(spectrum.len(), next_power_of_two(n) / 2, "input length {}", n);
            assert_eq!(spectrum.len(), Transformer::output_len(n));
        }
        assert_eq!(Transformer::output_len(0), 0);
    }

    #[test]
    fn test_single_sample_yields_empty_spectrum() {
        let config = rectangular().with_low_pass_filter(0.5);
        assert_eq!(transform(Some(&[42.0f64][..]), &config), Some(vec![]));
    }

    #[test]
    fn test_concrete_four_point_scenario() {
        let spectrum = transform_samples(&[1.0f32, 0.0, -1.0, 0.0], &rectangular());

        assert_eq!(spectrum.len(), 2);
        assert!(spectrum[0].norm() < 1e-12);
        assert!((spectrum[1] - Complex64::new(1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_dc_detection() {
        let c: f64 = -0.75;
        let spectrum = transform_samples(&vec![c; 256], &rectangular());

        // 2/L scaling applies to every bin, including DC
        assert!((spectrum[0].norm() - 2.0 * c.abs()).abs() < 1e-12);
        assert!(spectrum[1..].iter().all(|b| b.norm() < 1e-9));
    }

    #[test]
    fn test_single_tone_accuracy() {
        let n = 1024;
        let sample_rate = 48000.0;
        let k = 37;
        let freq = k as f64 * sample_rate / n as f64;

        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * freq * i as f64 / sample_rate).sin())
            .collect();

        let spectrum = transform_samples(&signal, &rectangular());
        let (peak_idx, peak_mag) = peak_bin(&spectrum);

        assert_eq!(peak_idx, k);
        assert!((peak_mag - 1.0).abs() < 1e-9);
        for (i, bin) in spectrum.iter().enumerate() {
            if i != k {
                assert!(bin.norm() < 1e-9, "bin {} leaked {}", i, bin.norm());
            }
        }
    }

    #[test]
    fn test_windowed_tone_peak() {
        let n = 1024;
        let k = 100;
        let signal: Vec<f32> = (0..n)
            .map(|i| (2.0 * PI * (k * i) as f64 / n as f64).sin() as f32)
            .collect();

        for window in Window::ALL {
            let config = TransformConfig::default().with_window(window);
            let spectrum = transform_samples(&signal, &config);
            let (peak_idx, peak_mag) = peak_bin(&spectrum);

            assert_eq!(peak_idx, k, "{:?}", window);

            // Peak is scaled by the window's coherent gain
            let expected = window.coherent_gain(n);
            assert!((peak_mag - expected).abs() < 1e-4, "{:?}: {}", window, peak_mag);

            // Leakage stays local to the peak
            assert!(spectrum[k + 20].norm() < 0.05 * peak_mag, "{:?}", window);
        }
    }

    #[test]
    fn test_overloads_agree() {
        let real: Vec<f64> = (0..50).map(|i| (i as f64 * 0.3).cos()).collect();
        let single: Vec<f32> = real.iter().map(|&x| x as f32).collect();
        let complex: Vec<Complex64> = real.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        let complex_single: Vec<Complex<f32>> =
            single.iter().map(|&x| Complex::new(x, 0.0)).collect();

        let config = TransformConfig::default();
        let from_real = transform_samples(&real, &config);
        let from_complex = transform_samples(&complex, &config);
        let from_single = transform_samples(&single, &config);
        let from_complex_single = transform_samples(&complex_single, &config);

        assert_eq!(from_real, from_complex);
        assert_eq!(from_single, from_complex_single);
        for (a, b) in from_real.iter().zip(from_single.iter()) {
            assert!((a - b).norm() < 1e-6);
        }
    }

    #[test]
    fn test_low_pass_filter_in_pipeline() {
        let n = 256;
        let signal: Vec<f64> = (0..n)
            .map(|i| {
                let t = i as f64 / n as f64;
                (2.0 * PI * 8.0 * t).sin() + 0.1 * (2.0 * PI * 40.0 * t).sin()
            })
            .collect();

        let unfiltered = transform_samples(&signal, &rectangular());
        let passthrough = transform_samples(&signal, &rectangular().with_low_pass_filter(0.0));
        assert_eq!(unfiltered, passthrough);

        let filtered = transform_samples(&signal, &rectangular().with_low_pass_filter(0.5));
        assert!((filtered[8].norm() - 1.0).abs() < 1e-9);
        assert_eq!(filtered[40], Complex64::new(0.0, 0.0));

        let peak_only = transform_samples(&signal, &rectangular().with_low_pass_filter(1.0));
        let survivors: Vec<usize> = (0..peak_only.len())
            .filter(|&i| peak_only[i].norm() > 0.0)
            .collect();
        assert_eq!(survivors, vec![8]);
    }

    #[test]
    fn test_transformer_reuse_matches_fresh_calls() {
        let config = TransformConfig::default().with_window(Window::BlackmanHarris);
        let mut transformer = Transformer::new(config);

        let long: Vec<f64> = (0..1000).map(|i| (i as f64).sin() * 50.0).collect();
        let short: Vec<f64> = (0..6).map(|i| i as f64).collect();

        let _ = transformer.process(&long);
        let reused = transformer.process(&short);

        assert_eq!(reused, transform_samples(&short, &config));
        assert_eq!(reused.len(), 4);
    }

    #[test]
    fn test_process_releases_scratch_contents() {
        let mut transformer = Transformer::new(TransformConfig::default());
        let spectrum = transformer.process(&vec![1.0f64; 300]);

        assert_eq!(spectrum.len(), 256);
        assert!(transformer.waveform.is_empty());
        assert!(transformer.scratch.is_empty());
    }

    #[test]
    fn test_set_config() {
        let mut transformer = Transformer::new(TransformConfig::default());
        transformer.set_config(rectangular());
        assert_eq!(transformer.config().window, Window::Rectangular);

        let spectrum = transformer.process(&[1.0f64, 0.0, -1.0, 0.0]);
        assert!((spectrum[1].norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_concurrent_invocations() {
        let handles: Vec<_> = (1..=4)
            .map(|k| {
                std::thread::spawn(move || {
                    let signal: Vec<f64> = (0..512)
                        .map(|i| (2.0 * PI * (k * 10 * i) as f64 / 512.0).cos())
                        .collect();
                    (k * 10, transform_samples(&signal, &rectangular()))
                })
            })
            .collect();

        for handle in handles {
            let (k, spectrum) = handle.join().unwrap();
            assert_eq!(peak_bin(&spectrum).0, k);
        }
    }
}
