//! Radix-2 Cooley-Tukey FFT engine
//!
//! Decimation in time: a bit-reversal permutation followed by `log2(L)`
//! butterfly stages. Stages are double-buffered, each one reading one half
//! of [`FftScratch`] and writing the other, so a stage never reads a value
//! it has already overwritten.

use num_complex::Complex64;
use std::f64::consts::PI;
use thiserror::Error;

const TWO_PI: f64 = 2.0 * PI;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    #[error("FFT length must be a power of two, got {0}")]
    NotPowerOfTwo(usize),

    #[error("FFT input is empty")]
    EmptyInput,
}

/// Reverse the lowest `bits` bits of `n`
#[inline]
pub fn bit_reverse(n: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    n.reverse_bits() >> (usize::BITS - bits)
}

/// Two-buffer arena for the butterfly stages
///
/// Owned by one transform at a time. Buffers grow to the largest length seen
/// and are overwritten completely on every run; `clear` empties them between runs.
#[derive(Debug, Default)]
pub struct FftScratch {
    reversed: Vec<Complex64>,
    spectrum: Vec<Complex64>,
}

impl FftScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size both buffers for transforms of `len` samples
    pub fn with_capacity(len: usize) -> Self {
        Self {
            reversed: Vec::with_capacity(len),
            spectrum: Vec::with_capacity(len),
        }
    }

    /// Drop the contents of both buffers, keeping their capacity
    pub fn clear(&mut self) {
        self.reversed.clear();
        self.spectrum.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.reversed.is_empty() && self.spectrum.is_empty()
    }

    fn buffers(&mut self, len: usize) -> (&mut [Complex64], &mut [Complex64]) {
        let zero = Complex64::new(0.0, 0.0);
        self.reversed.clear();
        self.reversed.resize(len, zero);
        self.spectrum.clear();
        self.spectrum.resize(len, zero);
        (&mut self.reversed[..], &mut self.spectrum[..])
    }
}

/// Compute the full complex spectrum of `input`
///
/// # Errors
/// [`TransformError::EmptyInput`] for a zero-length input and
/// [`TransformError::NotPowerOfTwo`] for any other non-power-of-two length.
pub fn fft(input: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    if input.is_empty() {
        return Err(TransformError::EmptyInput);
    }
    if !input.len().is_power_of_two() {
        return Err(TransformError::NotPowerOfTwo(input.len()));
    }

    let mut scratch = FftScratch::with_capacity(input.len());
    Ok(fft_with_scratch(input, &mut scratch).to_vec())
}

/// Run the transform inside `scratch`, returning the spectrum in natural order
///
/// The returned slice borrows from `scratch` and has the same length as
/// `input`, which must be a non-zero power of two.
pub(crate) fn fft_with_scratch<'a>(
    input: &[Complex64],
    scratch: &'a mut FftScratch,
) -> &'a mut [Complex64] {
    let len = input.len();
    debug_assert!(len.is_power_of_two(), "FFT length {} is not a power of two", len);

    let log2_len = len.trailing_zeros();
    let (mut src, mut dst) = scratch.buffers(len);

    // Bit reversal
    for (i, &sample) in input.iter().enumerate() {
        src[bit_reverse(i, log2_len)] = sample;
    }

    // Cooley-Tukey butterflies
    for s in 1..=log2_len {
        let l = 1usize << s;
        let half_l = l / 2;
        let wn = Complex64::from_polar(1.0, -TWO_PI / l as f64);

        for k in (0..len).step_by(l) {
            let mut w = Complex64::new(1.0, 0.0);

            for j in 0..half_l {
                let t = w * src[k + j + half_l];
                let u = src[k + j];

                dst[k + j] = u + t;
                dst[k + j + half_l] = u - t;

                w *= wn;
            }
        }

        std::mem::swap(&mut src, &mut dst);
    }

    // After the final swap the latest stage output is in `src`
    src
}
