//! Fixed capacity bounds
//!
//! The pipeline works against buffers of a fixed, compile-time capacity.
//! An RGB row is laid out with a padded stride of [`ROW_STRIDE`] samples
//! and a scratch row with a stride of [`SCRATCH_STRIDE`] samples, so an
//! image is accepted only if both layouts fit their buffers.
//!
//! Storage itself is compact; these constants only bound what is accepted.

use crate::error::{Error, Result};

/// Maximum supported image width in pixels.
pub const MAX_WIDTH: u32 = 731;

/// Samples per pixel in an [`ImageStore`](crate::ImageStore).
pub const CHANNELS: usize = 3;

/// Padded row stride of the three-channel image buffer, in samples.
pub const ROW_STRIDE: usize = MAX_WIDTH as usize * CHANNELS;

/// Capacity of the three-channel image buffer, in samples.
pub const IMAGE_CAPACITY: usize = 2_300_000;

/// Row stride of the single-channel scratch buffer, in samples.
pub const SCRATCH_STRIDE: usize = MAX_WIDTH as usize;

/// Capacity of the single-channel scratch buffer, in samples.
pub const SCRATCH_CAPACITY: usize = 750_000;

/// Largest height accepted by both buffers.
pub const MAX_HEIGHT: u32 = {
    let by_image = IMAGE_CAPACITY / ROW_STRIDE;
    let by_scratch = SCRATCH_CAPACITY / SCRATCH_STRIDE;
    if by_image < by_scratch {
        by_image as u32
    } else {
        by_scratch as u32
    }
};

/// Check that a `width x height` image fits the fixed buffers.
///
/// # Errors
///
/// - [`Error::InvalidDimension`] if either extent is zero.
/// - [`Error::DimensionExceeded`] if the width exceeds [`MAX_WIDTH`] or
///   either buffer would overflow its capacity.
pub fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    if width > MAX_WIDTH {
        return Err(Error::DimensionExceeded {
            width,
            height,
            reason: "width exceeds the maximum row stride",
        });
    }
    let rows = height as usize;
    if rows.saturating_mul(ROW_STRIDE) > IMAGE_CAPACITY {
        return Err(Error::DimensionExceeded {
            width,
            height,
            reason: "image buffer capacity exceeded",
        });
    }
    if rows.saturating_mul(SCRATCH_STRIDE) > SCRATCH_CAPACITY {
        return Err(Error::DimensionExceeded {
            width,
            height,
            reason: "scratch buffer capacity exceeded",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_stride_matches_width() {
        assert_eq!(ROW_STRIDE, 2193);
        assert_eq!(SCRATCH_STRIDE, 731);
    }

    #[test]
    fn test_max_height_is_scratch_bound() {
        // 750_000 / 731 = 1025, 2_300_000 / 2193 = 1048
        assert_eq!(MAX_HEIGHT, 1025);
    }

    #[test]
    fn test_accepts_bounds() {
        assert!(check_dimensions(1, 1).is_ok());
        assert!(check_dimensions(MAX_WIDTH, MAX_HEIGHT).is_ok());
    }

    #[test]
    fn test_rejects_zero() {
        assert!(matches!(
            check_dimensions(0, 10),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            check_dimensions(10, 0),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_rejects_wide() {
        assert!(matches!(
            check_dimensions(MAX_WIDTH + 1, 1),
            Err(Error::DimensionExceeded { .. })
        ));
    }

    #[test]
    fn test_rejects_tall() {
        assert!(matches!(
            check_dimensions(1, MAX_HEIGHT + 1),
            Err(Error::DimensionExceeded { .. })
        ));
    }
}
