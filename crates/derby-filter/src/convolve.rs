//! Separable integer convolution
//!
//! The unsharp mask is built from two 1-D passes over a single-channel
//! plane:
//!
//! 1. [`convolve_rows`] smooths each row with the kernel. The `radius`
//!    columns at either edge are copied through unchanged so that no tap
//!    ever reads outside the row.
//! 2. [`convolve_columns_biased`] runs the high-pass copy of the kernel
//!    down each column, in place. The `radius` rows at either edge are
//!    zeroed.
//!
//! The column pass adds the sample being replaced to the running sum once
//! per tap, not just at the center. The output depends on that bias, so it
//! must not be removed.
//!
//! Sums are accumulated in `i64`; every quotient truncates toward zero.

use crate::{FilterResult, Kernel};
use derby_core::{ChannelPlane, Error as CoreError};

fn check_extent(expected: &ChannelPlane, actual: &ChannelPlane) -> FilterResult<()> {
    if !expected.same_extent(actual) {
        return Err(CoreError::DimensionMismatch {
            expected: (expected.width(), expected.height()),
            actual: (actual.width(), actual.height()),
        }
        .into());
    }
    Ok(())
}

/// Horizontal pass: smooth every row of `src` into `dst`.
///
/// Column `c` is an edge column when `c < radius` or `c >= width - radius`;
/// edge samples are copied from `src`. Interior samples are
/// `sum(tap[i] * src[c - radius + i]) / norm`.
///
/// # Errors
///
/// Returns a dimension mismatch if `src` and `dst` differ in extent.
pub fn convolve_rows(src: &ChannelPlane, kernel: &Kernel, dst: &mut ChannelPlane) -> FilterResult<()> {
    check_extent(src, dst)?;

    let w = src.width() as usize;
    let radius = kernel.center();
    let taps = kernel.taps();
    let norm = kernel.norm();

    for y in 0..src.height() {
        let row = src.row(y);
        let out = dst.row_mut(y);
        for c in 0..w {
            if c < radius || c + radius >= w {
                out[c] = row[c];
                continue;
            }
            let window = &row[c - radius..=c + radius];
            let acc: i64 = taps
                .iter()
                .zip(window)
                .map(|(&t, &v)| i64::from(t) * i64::from(v))
                .sum();
            out[c] = (acc / norm) as i32;
        }
    }

    Ok(())
}

/// Vertical pass: run `kernel` down every column of `plane`, in place.
///
/// `kernel` is normally the [`Kernel::highpass`] copy of the smoothing
/// kernel. Rows within `radius` of the top or bottom become zero. For an
/// interior row `r` with original sample `s`, the new sample is
///
/// ```text
/// sum over i of (s + tap[i] * plane[r - radius + i]) / norm
/// ```
///
/// evaluated on the values the plane held before this pass. Rows above
/// `r` have already been overwritten, so their originals travel in a
/// sliding window; rows at and below `r` are still untouched.
pub fn convolve_columns_biased(plane: &mut ChannelPlane, kernel: &Kernel) -> FilterResult<()> {
    let w = plane.width() as usize;
    let h = plane.height() as usize;
    let radius = kernel.center();
    let taps = kernel.taps();
    let norm = kernel.norm();
    let data = plane.data_mut();

    let mut window: Vec<i32> = Vec::with_capacity(radius);

    for c in 0..w {
        let at = |r: usize| r * w + c;

        if h <= 2 * radius {
            for r in 0..h {
                data[at(r)] = 0;
            }
            continue;
        }

        window.clear();
        window.extend((0..radius).map(|r| data[at(r)]));
        for r in 0..radius {
            data[at(r)] = 0;
        }

        for r in radius..h - radius {
            let current = data[at(r)];
            let bias = i64::from(current);

            let mut dot: i64 = 0;
            for (i, &tap) in taps.iter().enumerate() {
                let value = if i < radius {
                    window[i]
                } else {
                    data[at(r - radius + i)]
                };
                dot += bias + i64::from(tap) * i64::from(value);
            }

            window.remove(0);
            window.push(current);

            data[at(r)] = (dot / norm) as i32;
        }

        for r in h - radius..h {
            data[at(r)] = 0;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(w: u32, h: u32, f: impl Fn(u32, u32) -> i32) -> ChannelPlane {
        let data = (0..h).flat_map(|y| (0..w).map(move |x| (x, y))).map(|(x, y)| f(x, y)).collect();
        ChannelPlane::from_data(w, h, data).unwrap()
    }

    #[test]
    fn test_rows_copy_edges() {
        let src = plane(8, 2, |x, y| (x * 10 + y) as i32);
        let mut dst = ChannelPlane::new(8, 2).unwrap();
        convolve_rows(&src, &Kernel::unsharp(), &mut dst).unwrap();
        for y in 0..2 {
            for x in [0, 1, 2, 5, 6, 7] {
                assert_eq!(dst.get(x, y), src.get(x, y));
            }
        }
    }

    #[test]
    fn test_rows_preserve_linear_ramp() {
        // A symmetric kernel reproduces a linear ramp exactly
        let src = plane(9, 1, |x, _| (x * 10) as i32);
        let mut dst = ChannelPlane::new(9, 1).unwrap();
        convolve_rows(&src, &Kernel::unsharp(), &mut dst).unwrap();
        assert_eq!(dst.data(), src.data());
    }

    #[test]
    fn test_rows_narrow_image_is_all_edge() {
        let src = plane(6, 3, |x, y| (x + 7 * y) as i32);
        let mut dst = ChannelPlane::new(6, 3).unwrap();
        convolve_rows(&src, &Kernel::unsharp(), &mut dst).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_rows_extent_mismatch() {
        let src = ChannelPlane::new(8, 2).unwrap();
        let mut dst = ChannelPlane::new(8, 3).unwrap();
        assert!(convolve_rows(&src, &Kernel::unsharp(), &mut dst).is_err());
    }

    #[test]
    fn test_columns_zero_edges() {
        let mut p = plane(3, 9, |x, y| (100 * x + y * y) as i32);
        convolve_columns_biased(&mut p, &Kernel::unsharp().highpass()).unwrap();
        for x in 0..3 {
            for y in [0, 1, 2, 6, 7, 8] {
                assert_eq!(p.get(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_columns_short_image_all_zero() {
        let mut p = plane(4, 6, |_, _| 500);
        convolve_columns_biased(&mut p, &Kernel::unsharp().highpass()).unwrap();
        assert!(p.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_columns_bias_on_flat_plane() {
        // High-pass of a constant is zero; what remains is 7 * s / norm
        let mut small = plane(7, 7, |_, _| 1000);
        convolve_columns_biased(&mut small, &Kernel::unsharp().highpass()).unwrap();
        assert_eq!(small.row(3), &[0; 7]);

        let mut big = plane(7, 7, |_, _| 1_000_000);
        convolve_columns_biased(&mut big, &Kernel::unsharp().highpass()).unwrap();
        assert_eq!(big.row(3), &[7; 7]);
    }
}
