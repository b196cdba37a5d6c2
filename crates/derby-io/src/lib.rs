//! derby-io - Image I/O for the enhancement pipeline
//!
//! Reads raster files into an RGB [`ImageStore`] and writes RGB stores
//! back out.
//!
//! # Supported formats
//!
//! - PNM: P2/P3/P5/P6 read, P3/P6 write (feature `pnm`, default)
//! - PNG: 8-bit gray/RGB/RGBA read, 8-bit RGB write (feature `png-format`, default)
//!
//! Written samples are clamped to `0..=255`.

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
#[cfg(feature = "pnm")]
pub use pnm::PnmEncoding;

use derby_core::ImageStore;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use tracing::info;

/// Convert a channel value to an output byte.
#[cfg_attr(not(any(feature = "pnm", feature = "png-format")), allow(dead_code))]
pub(crate) fn clamp_sample(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Read an image from a file, detecting the format from its contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<ImageStore> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let store = read_image_mem(&data)?;
    info!(
        path = %path.display(),
        width = store.width(),
        height = store.height(),
        "read image"
    );
    Ok(store)
}

/// Read an image from memory, detecting the format from its contents.
pub fn read_image_mem(data: &[u8]) -> IoResult<ImageStore> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(Cursor::new(data)),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[allow(unreachable_patterns)]
        format => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}

/// Write an RGB store to a file in the given format.
pub fn write_image<P: AsRef<Path>>(
    store: &ImageStore,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_to(store, &mut writer, format)?;
    writer.flush()?;
    info!(path = %path.display(), ?format, "wrote image");
    Ok(())
}

/// Encode an RGB store into memory in the given format.
pub fn write_image_mem(store: &ImageStore, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(store, &mut buffer, format)?;
    Ok(buffer)
}

#[allow(unused_variables)]
fn write_image_to<W: Write>(store: &ImageStore, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(store, writer, PnmEncoding::Binary),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(store, writer),
        #[allow(unreachable_patterns)]
        format => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}
