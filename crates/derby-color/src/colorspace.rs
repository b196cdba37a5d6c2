//! Color space conversion
//!
//! Integer RGB <-> HSV conversion, per pixel and in place over an
//! [`ImageStore`].
//!
//! # Encoding
//!
//! | Component | Range | Meaning |
//! |---|---|---|
//! | `h` | `-1` or `[0, 360]` | Hue in degrees; `-1` for achromatic pixels |
//! | `s` | `[0, 1024]` | `1024 * (max - min) / max` |
//! | `v` | `[0, 1020]` | `4 * max` |
//!
//! All divisions truncate toward zero, which is what Rust's integer `/`
//! and `%` do for `i32`.

use crate::ColorResult;
use derby_core::{ColorSpace, ImageStore};
use tracing::debug;

/// Hue assigned to pixels with zero chroma.
pub const HUE_UNDEFINED: i32 = -1;

/// Fixed-point representation of saturation 1.0.
pub const SATURATION_ONE: i32 = 1024;

/// Scale applied to the maximum channel to form the value component.
pub const VALUE_SCALE: i32 = 4;

const DEGREES_PER_SECTOR: i32 = 60;
const SECTORS: i32 = 6;

/// Fixed-point HSV triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

impl Hsv {
    /// Create a new HSV triple
    pub fn new(h: i32, s: i32, v: i32) -> Self {
        Self { h, s, v }
    }
}

/// Convert one RGB pixel to fixed-point HSV.
///
/// The maximum and minimum are seeded from R and G, then B is folded in.
/// When red holds the maximum, the hue branch depends on whether
/// `G >= B`; the `G < B` branch adds 360 before the (negative) offset.
pub fn rgb_to_hsv(r: i32, g: i32, b: i32) -> Hsv {
    let (mut max, mut min) = if r > g { (r, g) } else { (g, r) };
    if max < b {
        max = b;
    } else if min > b {
        min = b;
    }

    let delta = max - min;
    let v = VALUE_SCALE * max;
    let s = if max == 0 {
        0
    } else {
        SATURATION_ONE * delta / max
    };

    let h = if delta == 0 {
        HUE_UNDEFINED
    } else if max == r && g >= b {
        DEGREES_PER_SECTOR * (g - b) / delta
    } else if max == r {
        360 + DEGREES_PER_SECTOR * (g - b) / delta
    } else if max == g {
        120 + DEGREES_PER_SECTOR * (b - r) / delta
    } else {
        240 + DEGREES_PER_SECTOR * (r - g) / delta
    };

    Hsv { h, s, v }
}

/// Convert one fixed-point HSV pixel back to RGB.
///
/// Zero saturation yields the gray `v / 4` on every channel. Otherwise the
/// sector `j = (h / 60) % 6` selects the channel assignment; a hue far enough
/// below zero to give a negative sector maps to black.
pub fn hsv_to_rgb(hsv: Hsv) -> (i32, i32, i32) {
    let Hsv { h, s, v } = hsv;

    if s == 0 {
        let gray = v / VALUE_SCALE;
        return (gray, gray, gray);
    }

    let j = (h / DEGREES_PER_SECTOR) % SECTORS;
    let f = h % DEGREES_PER_SECTOR;

    // Sharpened channels may leave their nominal ranges; widen so the
    // products cannot overflow.
    let (s, v64, f) = (i64::from(s), i64::from(v), i64::from(f));
    let one = i64::from(SATURATION_ONE);
    let scale = i64::from(VALUE_SCALE);
    let sector = i64::from(DEGREES_PER_SECTOR);
    let sector_one = one * sector;
    let p = (v64 * (one - s) / (one * scale)) as i32;
    let q = (v64 * (sector_one - s * f) / (sector_one * scale)) as i32;
    let t = (v64 * (sector_one - s * (sector - f)) / (sector_one * scale)) as i32;
    let vv = v / VALUE_SCALE;

    match j {
        0 => (vv, t, p),
        1 => (q, vv, p),
        2 => (p, vv, t),
        3 => (p, q, vv),
        4 => (t, p, vv),
        5 => (vv, p, q),
        _ => (0, 0, 0),
    }
}

/// Convert an RGB store to fixed-point HSV in place.
///
/// # Errors
///
/// Returns [`ColorError::Core`](crate::ColorError::Core) wrapping a color
/// space mismatch if the store is not in RGB.
pub fn convert_rgb_to_hsv(store: &mut ImageStore) -> ColorResult<()> {
    store.convert_in_place(ColorSpace::Rgb, ColorSpace::Hsv, |[r, g, b]| {
        let Hsv { h, s, v } = rgb_to_hsv(r, g, b);
        [h, s, v]
    })?;
    debug!(
        width = store.width(),
        height = store.height(),
        "converted RGB to HSV"
    );
    Ok(())
}

/// Convert a fixed-point HSV store back to RGB in place.
///
/// # Errors
///
/// Returns [`ColorError::Core`](crate::ColorError::Core) wrapping a color
/// space mismatch if the store is not in HSV.
pub fn convert_hsv_to_rgb(store: &mut ImageStore) -> ColorResult<()> {
    store.convert_in_place(ColorSpace::Hsv, ColorSpace::Rgb, |[h, s, v]| {
        let (r, g, b) = hsv_to_rgb(Hsv { h, s, v });
        [r, g, b]
    })?;
    debug!(
        width = store.width(),
        height = store.height(),
        "converted HSV to RGB"
    );
    Ok(())
}
