//! The image store
//!
//! [`ImageStore`] is the three-channel integer image every pipeline stage
//! mutates in place. The same samples hold either an RGB triple or the
//! fixed-point HSV encoding of one, so the store carries a [`ColorSpace`]
//! tag. Operations name the color space they expect and fail with
//! [`Error::ColorSpaceMismatch`] instead of silently misreading samples.
//!
//! # Layout
//!
//! Pixels are stored row-major, three samples per pixel, with a compact
//! row stride of `3 * width`. Dimensions are validated against
//! [`limits`](crate::limits) on construction.

use crate::error::{Error, Result};
use crate::limits::{CHANNELS, check_dimensions};
use crate::plane::ChannelPlane;

/// One pixel: three channel samples.
pub type Triple = [i32; 3];

/// The encoding currently held by an [`ImageStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Red, green, blue
    Rgb,
    /// Fixed-point hue, saturation, value
    Hsv,
}

/// Channel selector within a pixel triple.
///
/// Channels are positional; the associated constants name them for each
/// color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    First,
    Second,
    Third,
}

impl Channel {
    pub const RED: Channel = Channel::First;
    pub const GREEN: Channel = Channel::Second;
    pub const BLUE: Channel = Channel::Third;
    pub const HUE: Channel = Channel::First;
    pub const SATURATION: Channel = Channel::Second;
    pub const VALUE: Channel = Channel::Third;

    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::First, Channel::Second, Channel::Third];

    /// Offset of this channel within a pixel triple.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Channel::First => 0,
            Channel::Second => 1,
            Channel::Third => 2,
        }
    }
}

/// Three-channel integer image with an explicit color-space tag.
///
/// # Examples
///
/// ```
/// use derby_core::{ColorSpace, ImageStore};
///
/// let mut store = ImageStore::new(4, 2, ColorSpace::Rgb).unwrap();
/// store.set_pixel(1, 1, [10, 20, 30]).unwrap();
/// assert_eq!(store.pixel(1, 1), Some([10, 20, 30]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStore {
    width: u32,
    height: u32,
    space: ColorSpace,
    data: Vec<i32>,
}

impl ImageStore {
    /// Create a zero-filled store.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero or exceed the fixed
    /// capacity (see [`check_dimensions`]).
    pub fn new(width: u32, height: u32, space: ColorSpace) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            space,
            data: vec![0; width as usize * height as usize * CHANNELS],
        })
    }

    /// Create a store from row-major interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SampleCount`] if `samples.len() != width * height * 3`,
    /// or a dimension error as for [`ImageStore::new`].
    pub fn from_samples(
        width: u32,
        height: u32,
        space: ColorSpace,
        samples: Vec<i32>,
    ) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize * CHANNELS;
        if samples.len() != expected {
            return Err(Error::SampleCount {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            space,
            data: samples,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the color space the samples are currently encoded in.
    #[inline]
    pub fn color_space(&self) -> ColorSpace {
        self.space
    }

    /// Get raw access to the interleaved samples.
    #[inline]
    pub fn samples(&self) -> &[i32] {
        &self.data
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Triple> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
    }

    /// Fail unless the store is encoded in `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColorSpaceMismatch`] otherwise.
    pub fn expect_space(&self, expected: ColorSpace) -> Result<()> {
        if self.space != expected {
            return Err(Error::ColorSpaceMismatch {
                expected,
                actual: self.space,
            });
        }
        Ok(())
    }

    /// Get the pixel at (x, y), or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Triple> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Triple) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width as usize + x as usize,
                len: self.width as usize * self.height as usize,
            });
        }
        let i = self.index(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&px);
        Ok(())
    }

    /// Apply `f` to every pixel in place without changing the color space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColorSpaceMismatch`] unless the store holds `space`.
    pub fn for_each_pixel_mut<F>(&mut self, space: ColorSpace, mut f: F) -> Result<()>
    where
        F: FnMut(&mut Triple),
    {
        self.expect_space(space)?;
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            let mut px = [chunk[0], chunk[1], chunk[2]];
            f(&mut px);
            chunk.copy_from_slice(&px);
        }
        Ok(())
    }

    /// Re-encode every pixel from `from` to `to` in place.
    ///
    /// On success the store is tagged with `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColorSpaceMismatch`] unless the store holds `from`.
    pub fn convert_in_place<F>(&mut self, from: ColorSpace, to: ColorSpace, mut f: F) -> Result<()>
    where
        F: FnMut(Triple) -> Triple,
    {
        self.expect_space(from)?;
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            let px = f([chunk[0], chunk[1], chunk[2]]);
            chunk.copy_from_slice(&px);
        }
        self.space = to;
        Ok(())
    }

    /// Copy one channel out into a new plane.
    pub fn channel(&self, channel: Channel) -> ChannelPlane {
        let samples = self
            .data
            .chunks_exact(CHANNELS)
            .map(|px| px[channel.offset()])
            .collect();
        ChannelPlane::from_parts(self.width, self.height, samples)
    }

    /// Overwrite one channel from a plane of the same extent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the plane's extent differs.
    pub fn set_channel(&mut self, channel: Channel, plane: &ChannelPlane) -> Result<()> {
        if plane.width() != self.width || plane.height() != self.height {
            return Err(Error::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (plane.width(), plane.height()),
            });
        }
        let offset = channel.offset();
        for (px, &v) in self.data.chunks_exact_mut(CHANNELS).zip(plane.data()) {
            px[offset] = v;
        }
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}
