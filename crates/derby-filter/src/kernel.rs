//! Convolution kernels
//!
//! A [`Kernel`] is a 1-D, odd-length table of integer taps plus the
//! normalizer every convolution sum is divided by. The taps are not
//! normalized themselves; normalization happens by integer division per
//! output sample.
//!
//! The same tap table drives both passes of the unsharp mask. The column
//! pass uses [`Kernel::highpass`], a copy whose center tap has the
//! normalizer subtracted, so the caller's kernel is never modified.

use crate::{FilterError, FilterResult};

/// Taps of the unsharp-mask smoothing kernel (a discretized Gaussian).
pub const UNSHARP_TAPS: [i32; 7] = [4433, 54006, 242036, 399050, 242036, 54006, 4433];

/// A 1-D integer convolution kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    /// Tap weights
    taps: Vec<i32>,
    /// Index of the center tap
    center: usize,
    /// Divisor applied to every convolution sum
    norm: i64,
}

impl Kernel {
    /// Create the fixed unsharp-mask smoothing kernel.
    ///
    /// Its normalizer is the tap sum, exactly 1,000,000.
    pub fn unsharp() -> Self {
        let taps = UNSHARP_TAPS.to_vec();
        let norm = taps.iter().map(|&t| i64::from(t)).sum();
        Self {
            taps,
            center: UNSHARP_TAPS.len() / 2,
            norm,
        }
    }

    /// Create a kernel from taps, normalized by their sum.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if the tap count is even or
    /// zero, or if the taps sum to zero.
    pub fn from_taps(taps: &[i32]) -> FilterResult<Self> {
        if taps.is_empty() || taps.len() % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "tap count must be odd, got {}",
                taps.len()
            )));
        }
        let norm: i64 = taps.iter().map(|&t| i64::from(t)).sum();
        if norm == 0 {
            return Err(FilterError::InvalidKernel("taps sum to zero".into()));
        }
        Ok(Self {
            taps: taps.to_vec(),
            center: taps.len() / 2,
            norm,
        })
    }

    /// Get the tap weights.
    #[inline]
    pub fn taps(&self) -> &[i32] {
        &self.taps
    }

    /// Get the number of taps.
    #[inline]
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    /// Kernels always hold at least one tap.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// Get the index of the center tap, which is also the kernel radius.
    #[inline]
    pub fn center(&self) -> usize {
        self.center
    }

    /// Get the tap at `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<i32> {
        self.taps.get(i).copied()
    }

    /// Get the divisor applied to convolution sums.
    #[inline]
    pub fn norm(&self) -> i64 {
        self.norm
    }

    /// Get the current sum of the taps.
    ///
    /// Equals [`Kernel::norm`] for a smoothing kernel and zero for its
    /// [`Kernel::highpass`] copy.
    pub fn sum(&self) -> i64 {
        self.taps.iter().map(|&t| i64::from(t)).sum()
    }

    /// Check whether the taps are a palindrome around the center.
    pub fn is_symmetric(&self) -> bool {
        self.taps.iter().eq(self.taps.iter().rev())
    }

    /// Derive the high-pass companion of this kernel.
    ///
    /// The center tap is reduced by the normalizer while the normalizer
    /// itself is kept, so convolving with the result yields
    /// `smoothed - original`.
    pub fn highpass(&self) -> Self {
        let mut taps = self.taps.clone();
        taps[self.center] = (i64::from(taps[self.center]) - self.norm) as i32;
        Self {
            taps,
            center: self.center,
            norm: self.norm,
        }
    }
}
