//! Single-channel integer planes
//!
//! A [`ChannelPlane`] is a `width x height` grid of `i32` samples stored
//! row-major with a compact stride. The unsharp-mask engine extracts one
//! channel of an [`ImageStore`](crate::ImageStore) into a plane, filters a
//! second, reusable plane from it, and writes the sharpened channel back.

use crate::error::{Error, Result};

/// A single-channel grid of integer samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPlane {
    width: u32,
    height: u32,
    data: Vec<i32>,
}

impl ChannelPlane {
    /// Create a zero-filled plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    /// Create a plane from row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SampleCount`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<i32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::SampleCount {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a plane whose extent was validated by the caller.
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<i32>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// Get the plane width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the plane height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether another plane has the same extent.
    pub fn same_extent(&self, other: &ChannelPlane) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Get a sample at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Set a sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are outside the plane.
    pub fn set(&mut self, x: u32, y: u32, val: i32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width as usize + x as usize,
                len: self.data.len(),
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = val;
        Ok(())
    }

    /// Get all samples in row-major order.
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Get mutable access to all samples in row-major order.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Get one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[i32] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Get one row of samples mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [i32] {
        let start = y as usize * self.width as usize;
        let w = self.width as usize;
        &mut self.data[start..start + w]
    }

    /// Set every sample to zero.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
