//! The enhancement pipeline
//!
//! [`enhance`] runs the stages in a fixed order on an RGB store and leaves
//! it in RGB. [`run`] adds reading and writing around it.

use crate::{Caliper, DerbyResult};
use derby_color::{convert_hsv_to_rgb, convert_rgb_to_hsv};
use derby_core::ImageStore;
use derby_filter::{Kernel, levels, unsharp_hsv};
use derby_io::{ImageFormat, read_image, write_image};
use std::path::Path;
use tracing::debug;

/// Levels, RGB to HSV, unsharp H/S/V, HSV to RGB.
///
/// # Errors
///
/// Returns a color space mismatch if `store` is not in RGB.
pub fn enhance(store: &mut ImageStore) -> DerbyResult<()> {
    let caliper = Caliper::start("enhance");

    levels(store)?;
    convert_rgb_to_hsv(store)?;

    let kernel = Kernel::unsharp();
    debug!(norm = kernel.norm(), "kernel ready");
    unsharp_hsv(store, &kernel)?;

    convert_hsv_to_rgb(store)?;

    caliper.end();
    Ok(())
}

/// Read `input`, enhance it, and write the result to `output`.
///
/// The output format follows the output file's extension; PNM is used
/// when the extension is missing or unknown.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> DerbyResult<()> {
    let mut store = read_image(input)?;
    enhance(&mut store)?;
    let format = ImageFormat::from_path(&output).unwrap_or(ImageFormat::Pnm);
    write_image(&store, output, format)?;
    Ok(())
}
