//! Levels adjustment
//!
//! A linear contrast stretch applied to RGB data before any color space
//! conversion: every channel value is mapped through
//! `(in - black) * 255 / (white - black)` and clamped to `[0, 255]`.
//!
//! Input samples are not assumed to lie in `[0, 255]` (PNM files may carry
//! 16-bit samples), so the mapping is computed directly rather than
//! through a 256-entry lookup table.

use crate::FilterResult;
use derby_core::{ColorSpace, ImageStore};
use tracing::debug;

/// Input level mapped to 0.
pub const LEVELS_BLACK: i32 = 10;

/// Input level mapped to 255.
pub const LEVELS_WHITE: i32 = 243;

/// Map one channel value through the levels stretch.
///
/// Values at or below [`LEVELS_BLACK`] become 0 and values at or above
/// [`LEVELS_WHITE`] become 255. In between the quotient truncates toward
/// zero.
#[inline]
pub fn levels_value(v: i32) -> i32 {
    let stretched =
        (i64::from(v) - i64::from(LEVELS_BLACK)) * 255 / i64::from(LEVELS_WHITE - LEVELS_BLACK);
    stretched.clamp(0, 255) as i32
}

/// Apply the levels stretch to every channel of an RGB store in place.
///
/// # Errors
///
/// Returns a color space mismatch if the store is not in RGB.
pub fn levels(store: &mut ImageStore) -> FilterResult<()> {
    store.for_each_pixel_mut(ColorSpace::Rgb, |px| {
        for v in px.iter_mut() {
            *v = levels_value(*v);
        }
    })?;
    debug!(
        width = store.width(),
        height = store.height(),
        black = LEVELS_BLACK,
        white = LEVELS_WHITE,
        "applied levels"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_endpoints() {
        assert_eq!(levels_value(LEVELS_BLACK), 0);
        assert_eq!(levels_value(LEVELS_WHITE), 255);
    }

    #[test]
    fn test_levels_clamps() {
        for v in [-5, 0, 3, 9, 10] {
            assert_eq!(levels_value(v), 0, "input {v}");
        }
        for v in [243, 244, 255, 1000, 65535] {
            assert_eq!(levels_value(v), 255, "input {v}");
        }
    }

    #[test]
    fn test_levels_linear_truncation() {
        assert_eq!(levels_value(11), 1);
        assert_eq!(levels_value(40), 32);
        assert_eq!(levels_value(60), 54);
        assert_eq!(levels_value(126), 126);
        assert_eq!(levels_value(200), 207);
        assert_eq!(levels_value(242), 253);
    }

    #[test]
    fn test_levels_monotonic() {
        let mut prev = levels_value(0);
        for v in 1..=255 {
            let cur = levels_value(v);
            assert!(cur >= prev);
            prev = cur;
        }
    }

    #[test]
    fn test_levels_requires_rgb() {
        let mut store = ImageStore::new(2, 2, ColorSpace::Hsv).unwrap();
        assert!(levels(&mut store).is_err());
    }

    #[test]
    fn test_levels_store() {
        let mut store = ImageStore::from_samples(
            2,
            1,
            ColorSpace::Rgb,
            vec![0, 10, 243, 200, 40, 60],
        )
        .unwrap();
        levels(&mut store).unwrap();
        assert_eq!(store.samples(), &[0, 0, 255, 207, 32, 54]);
    }
}
