//! Error types for derby-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::image::ColorSpace;
use thiserror::Error;

/// Derby core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Zero-sized image
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Image does not fit the fixed buffer capacity
    #[error("image dimensions {width}x{height} exceed supported bounds: {reason}")]
    DimensionExceeded {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Operation applied to data in the wrong color space
    #[error("color space mismatch: expected {expected:?}, store holds {actual:?}")]
    ColorSpaceMismatch {
        expected: ColorSpace,
        actual: ColorSpace,
    },

    /// Sample buffer length does not match the image extent
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    SampleCount { expected: usize, actual: usize },
}

/// Result type alias for derby-core operations
pub type Result<T> = std::result::Result<T, Error>;
