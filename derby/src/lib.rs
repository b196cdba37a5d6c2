//! derby - Levels stretch and HSV unsharp masking
//!
//! A fixed, single-pass enhancement pipeline over an RGB raster:
//!
//! 1. levels stretch of every RGB sample ([`filter::levels`])
//! 2. fixed-point RGB to HSV conversion ([`color::convert_rgb_to_hsv`])
//! 3. unsharp masking of hue, saturation and value with the 7-tap kernel
//!    ([`filter::unsharp_hsv`])
//! 4. conversion back to RGB ([`color::convert_hsv_to_rgb`])
//!
//! # Example
//!
//! ```
//! use derby::{ColorSpace, ImageStore};
//!
//! let mut store = ImageStore::new(16, 16, ColorSpace::Rgb).unwrap();
//! derby::enhance(&mut store).unwrap();
//! assert_eq!(store.color_space(), ColorSpace::Rgb);
//! ```

pub mod caliper;
mod error;
pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use derby_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use derby_color as color;
pub use derby_filter as filter;
pub use derby_io as io;

pub use caliper::Caliper;
pub use error::{DerbyError, DerbyResult};
pub use pipeline::{enhance, run};
