//! PNG image format support

use crate::{IoError, IoResult, clamp_sample};
use derby_core::{ColorSpace, ImageStore, check_dimensions, limits::CHANNELS};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};
use tracing::debug;

/// Read an 8-bit PNG image
///
/// RGB and RGBA are read directly (alpha is dropped); gray and gray+alpha
/// are replicated into all three channels.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<ImageStore> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let samples_per_pixel = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => 1,
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => 2,
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };
    check_dimensions(width, height)?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut samples = Vec::with_capacity(width as usize * height as usize * CHANNELS);
    for row in data.chunks(bytes_per_row).take(height as usize) {
        for px in row.chunks_exact(samples_per_pixel).take(width as usize) {
            let px = match samples_per_pixel {
                1 | 2 => [px[0]; 3],
                _ => [px[0], px[1], px[2]],
            };
            samples.extend(px.iter().map(|&v| i32::from(v)));
        }
    }

    debug!(width, height, ?color_type, "decoded PNG");
    Ok(ImageStore::from_samples(
        width,
        height,
        ColorSpace::Rgb,
        samples,
    )?)
}

/// Write an RGB store as an 8-bit RGB PNG
///
/// Samples outside `0..=255` are clamped.
pub fn write_png<W: Write>(store: &ImageStore, writer: W) -> IoResult<()> {
    store.expect_space(ColorSpace::Rgb)?;

    let mut encoder = Encoder::new(writer, store.width(), store.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data: Vec<u8> = store.samples().iter().map(|&v| clamp_sample(v)).collect();
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
