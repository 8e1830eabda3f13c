//! Input adapter: lifts time-domain samples into a zero-padded complex buffer
//!
//! Transforms only run on power-of-two lengths, so every waveform is padded
//! with zeros up to the next power of two. Samples are never truncated.

use num_complex::{Complex, Complex64};

/// A time-domain sample that can be lifted into a double-precision complex value
pub trait Sample: Copy {
    /// Convert to a complex value (real samples get a zero imaginary part)
    fn to_complex(self) -> Complex64;
}

impl Sample for f32 {
    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self as f64, 0.0)
    }
}

impl Sample for f64 {
    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }
}

impl Sample for Complex<f32> {
    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self.re as f64, self.im as f64)
    }
}

impl Sample for Complex64 {
    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }
}

/// Smallest power of two >= `n` (1 for `n == 0`)
pub fn next_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

/// Copy `samples` into a new complex buffer padded with zeros to a power of two
///
/// # Returns
/// Buffer of length `next_power_of_two(samples.len())`
pub fn pad_to_power_of_two<S: Sample>(samples: &[S]) -> Vec<Complex64> {
    let mut buffer = Vec::new();
    fill_padded(samples, &mut buffer);
    buffer
}

/// Fill a caller-owned buffer with `samples`, zero-padded to a power of two
///
/// Any previous contents of `buffer` are discarded.
pub fn fill_padded<S: Sample>(samples: &[S], buffer: &mut Vec<Complex64>) {
    let padded_len = next_power_of_two(samples.len());

    buffer.clear();
    buffer.reserve(padded_len);
    buffer.extend(samples.iter().map(|&s| s.to_complex()));
    buffer.resize(padded_len, Complex64::new(0.0, 0.0));
}
