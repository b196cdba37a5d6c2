//! Synthetic RGB test images
//!
//! Deterministic generators so that regression tests can state exact
//! expected outputs without shipping image files.

use crate::TestResult;
use derby_core::{ColorSpace, ImageStore, Triple};

/// Build an RGB store where every pixel comes from `f(x, y)`.
pub fn from_fn<F>(w: u32, h: u32, mut f: F) -> TestResult<ImageStore>
where
    F: FnMut(u32, u32) -> Triple,
{
    let mut samples = Vec::with_capacity(w as usize * h as usize * 3);
    for y in 0..h {
        for x in 0..w {
            samples.extend_from_slice(&f(x, y));
        }
    }
    Ok(ImageStore::from_samples(w, h, ColorSpace::Rgb, samples)?)
}

/// Create a uniform RGB image.
pub fn uniform_rgb(w: u32, h: u32, px: Triple) -> TestResult<ImageStore> {
    from_fn(w, h, |_, _| px)
}

/// Create a checkerboard of `cell x cell` squares, `a` at the origin.
pub fn checkerboard(w: u32, h: u32, cell: u32, a: Triple, b: Triple) -> TestResult<ImageStore> {
    from_fn(w, h, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b }
    })
}

/// Create a structured color gradient with per-channel wraparound.
///
/// Pixel (x, y) is `((37x + 11y) % 256, (5x + 53y) % 256, (x^2 + 3y) % 256)`.
pub fn gradient(w: u32, h: u32) -> TestResult<ImageStore> {
    from_fn(w, h, |x, y| {
        let (x, y) = (x as i32, y as i32);
        [
            (x * 37 + y * 11) % 256,
            (x * 5 + y * 53) % 256,
            (x * x + y * 3) % 256,
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_cells() {
        let img = checkerboard(4, 4, 2, [1, 1, 1], [9, 9, 9]).unwrap();
        assert_eq!(img.pixel(0, 0), Some([1, 1, 1]));
        assert_eq!(img.pixel(1, 1), Some([1, 1, 1]));
        assert_eq!(img.pixel(2, 0), Some([9, 9, 9]));
        assert_eq!(img.pixel(2, 2), Some([1, 1, 1]));
    }

    #[test]
    fn test_gradient_values() {
        let img = gradient(9, 8).unwrap();
        assert_eq!(img.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(img.pixel(8, 7), Some([(8 * 37 + 77) % 256, (40 + 371) % 256, 64 + 21]));
    }
}
