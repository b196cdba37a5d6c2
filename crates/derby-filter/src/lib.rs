//! derby-filter - Levels adjustment and unsharp masking
//!
//! This crate provides the pixel-processing stages of the pipeline:
//!
//! - Levels (linear contrast stretch) on RGB data ([`enhance`])
//! - The fixed 7-tap smoothing kernel ([`kernel`])
//! - Separable integer convolution: a low-pass row pass and a biased
//!   high-pass column pass ([`convolve`])
//! - Per-channel unsharp masking of HSV data ([`unsharp`])

pub mod convolve;
pub mod enhance;
mod error;
pub mod kernel;
pub mod unsharp;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{convolve_columns_biased, convolve_rows};
pub use enhance::{LEVELS_BLACK, LEVELS_WHITE, levels, levels_value};
pub use unsharp::{SharpenParams, UnsharpMask, sharpen_plane, unsharp_channel, unsharp_hsv};
