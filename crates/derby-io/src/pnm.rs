//! PNM (Portable Any Map) format support
//!
//! Reads PGM and PPM in both ASCII (P2/P3) and binary (P5/P6) form, and
//! writes PPM as P6 or P3. Gray input is replicated into all three
//! channels. Samples are stored as read; they are not rescaled to 255
//! when `maxval` differs.

use crate::{IoError, IoResult, clamp_sample};
use derby_core::{ColorSpace, ImageStore, check_dimensions, limits::CHANNELS};
use std::io::{BufRead, Read, Write};
use tracing::debug;

/// Sample encoding used when writing a PPM file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PnmEncoding {
    /// P6, one byte per sample
    #[default]
    Binary,
    /// P3, decimal samples separated by whitespace
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    GrayAscii,
    RgbAscii,
    GrayBinary,
    RgbBinary,
}

impl Kind {
    fn from_magic(magic: &[u8]) -> IoResult<Self> {
        match magic {
            b"P2" => Ok(Kind::GrayAscii),
            b"P3" => Ok(Kind::RgbAscii),
            b"P5" => Ok(Kind::GrayBinary),
            b"P6" => Ok(Kind::RgbBinary),
            _ => Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM magic: {}",
                String::from_utf8_lossy(magic)
            ))),
        }
    }

    fn channels(self) -> usize {
        match self {
            Kind::GrayAscii | Kind::GrayBinary => 1,
            Kind::RgbAscii | Kind::RgbBinary => 3,
        }
    }

    fn is_binary(self) -> bool {
        matches!(self, Kind::GrayBinary | Kind::RgbBinary)
    }
}

/// Token reader over the header and ASCII raster.
struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_separators(&mut self) {
        while let Some(&c) = self.data.get(self.pos) {
            if c == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' {
                        break;
                    }
                }
            } else if c.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn next_uint(&mut self, what: &str) -> IoResult<u32> {
        self.skip_separators();
        let start = self.pos;
        while self.data.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData(format!("expected {what}")));
        }
        std::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| IoError::InvalidData(format!("{what} out of range")))
    }

    fn rest(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }
}

/// Read a PNM image (P2/P3/P5/P6) from a reader.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] for any other magic number
/// - [`IoError::InvalidData`] for a malformed header or a truncated raster
/// - a core dimension error if the image does not fit the fixed capacity
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<ImageStore> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    if data.len() < 2 {
        return Err(IoError::InvalidData("missing PNM magic".to_string()));
    }
    let kind = Kind::from_magic(&data[..2])?;

    let mut scan = Scanner::new(&data[2..]);
    let width = scan.next_uint("width")?;
    let height = scan.next_uint("height")?;
    let maxval = scan.next_uint("maxval")?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("invalid maxval {maxval}")));
    }
    check_dimensions(width, height)?;

    let count = width as usize * height as usize * kind.channels();
    let values = if kind.is_binary() {
        match scan.data.get(scan.pos) {
            Some(c) if c.is_ascii_whitespace() => scan.pos += 1,
            _ => {
                return Err(IoError::InvalidData(
                    "missing separator before raster".to_string(),
                ));
            }
        }
        read_binary_raster(scan.rest(), count, maxval)?
    } else {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            match scan.next_uint("sample") {
                Ok(v) => values.push(v as i32),
                Err(_) if scan.rest().iter().all(u8::is_ascii_whitespace) => {
                    return Err(IoError::InvalidData(format!(
                        "truncated raster: {} of {} samples",
                        values.len(),
                        count
                    )));
                }
                Err(e) => return Err(e),
            }
        }
        values
    };

    let samples = if kind.channels() == 1 {
        values.iter().flat_map(|&v| [v; CHANNELS]).collect()
    } else {
        values
    };
    debug!(width, height, maxval, ?kind, "decoded PNM");
    Ok(ImageStore::from_samples(
        width,
        height,
        ColorSpace::Rgb,
        samples,
    )?)
}

fn read_binary_raster(raster: &[u8], count: usize, maxval: u32) -> IoResult<Vec<i32>> {
    let bytes_per_sample = if maxval < 256 { 1 } else { 2 };
    let needed = count * bytes_per_sample;
    if raster.len() < needed {
        return Err(IoError::InvalidData(format!(
            "truncated raster: {} of {} bytes",
            raster.len(),
            needed
        )));
    }
    let raster = &raster[..needed];
    let values = if bytes_per_sample == 1 {
        raster.iter().map(|&b| i32::from(b)).collect()
    } else {
        raster
            .chunks_exact(2)
            .map(|pair| i32::from(u16::from_be_bytes([pair[0], pair[1]])))
            .collect()
    };
    Ok(values)
}

/// Write an RGB store as a PPM with maxval 255.
///
/// Samples outside `0..=255` are clamped.
///
/// # Errors
///
/// Returns a color space mismatch if the store holds HSV data, or an I/O
/// error from the writer.
pub fn write_pnm<W: Write>(
    store: &ImageStore,
    mut writer: W,
    encoding: PnmEncoding,
) -> IoResult<()> {
    store.expect_space(ColorSpace::Rgb)?;
    let (width, height) = (store.width(), store.height());

    match encoding {
        PnmEncoding::Binary => {
            write!(writer, "P6\n{} {}\n255\n", width, height)?;
            let bytes: Vec<u8> = store.samples().iter().map(|&v| clamp_sample(v)).collect();
            writer.write_all(&bytes)?;
        }
        PnmEncoding::Ascii => {
            write!(writer, "P3\n{} {}\n255\n", width, height)?;
            let row_len = width as usize * CHANNELS;
            for row in store.samples().chunks(row_len) {
                let line: Vec<String> = row
                    .iter()
                    .map(|&v| clamp_sample(v).to_string())
                    .collect();
                writeln!(writer, "{}", line.join(" "))?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
