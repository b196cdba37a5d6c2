//! Derby Color - Fixed-point color space conversion
//!
//! This crate converts an [`ImageStore`](derby_core::ImageStore) between
//! RGB and an integer HSV encoding:
//!
//! - **Hue**: degrees, `-1` when undefined (achromatic pixels)
//! - **Saturation**: fraction scaled by 1024, in `[0, 1024]`
//! - **Value**: maximum channel scaled by 4
//!
//! Every division truncates toward zero. The conversions are a fixed-point
//! scheme in their own right, not an approximation of floating-point HSV,
//! and results must match bit for bit.

pub mod colorspace;
pub mod error;

// Re-export core types
pub use derby_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use colorspace::{
    HUE_UNDEFINED, Hsv, SATURATION_ONE, VALUE_SCALE, convert_hsv_to_rgb, convert_rgb_to_hsv,
    hsv_to_rgb, rgb_to_hsv,
};
